use leptos::prelude::*;

struct Photo {
    caption: &'static str,
    tone: &'static str,
}

const PHOTOS: &[Photo] = &[
    Photo { caption: "季節の前菜盛り合わせ", tone: "bg-amber-100" },
    Photo { caption: "鴨胸肉のロースト", tone: "bg-rose-100" },
    Photo { caption: "店内カウンター", tone: "bg-stone-200" },
    Photo { caption: "自然派ワインのセラー", tone: "bg-emerald-100" },
    Photo { caption: "本日の鮮魚のポワレ", tone: "bg-sky-100" },
    Photo { caption: "デザートの盛り付け", tone: "bg-orange-100" },
    Photo { caption: "神楽坂の路地からの外観", tone: "bg-stone-300" },
    Photo { caption: "朝の仕込み風景", tone: "bg-lime-100" },
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"ギャラリー"</h1>
        <div class="mt-6 grid grid-cols-2 md:grid-cols-4 gap-4">
            {PHOTOS
                .iter()
                .map(|p| {
                    let tone = format!(
                        "aspect-square rounded-lg flex items-end p-3 {}",
                        p.tone
                    );
                    view! {
                        <figure class=tone>
                            <figcaption class="text-xs text-stone-700 bg-white/80 rounded px-2 py-1">
                                {p.caption}
                            </figcaption>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
