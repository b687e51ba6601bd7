use crate::web::router::use_navigate;
use leptos::prelude::*;
use saveur_shared::course::CATALOG;
use saveur_shared::models::format_yen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Season {
    All,
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    fn label(self) -> &'static str {
        match self {
            Season::All => "すべて",
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::Autumn => "秋",
            Season::Winter => "冬",
        }
    }
}

struct AlaCarte {
    name: &'static str,
    price: u32,
    season: Season,
}

// 通年品は All 扱い
const ALA_CARTE: &[AlaCarte] = &[
    AlaCarte { name: "田舎風パテ", price: 1400, season: Season::All },
    AlaCarte { name: "ホタルイカと菜の花のマリネ", price: 1600, season: Season::Spring },
    AlaCarte { name: "桃と生ハムの冷製", price: 1800, season: Season::Summer },
    AlaCarte { name: "とうもろこしの冷製スープ", price: 1200, season: Season::Summer },
    AlaCarte { name: "きのこのフリカッセ", price: 1700, season: Season::Autumn },
    AlaCarte { name: "鴨胸肉のロースト 無花果添え", price: 2900, season: Season::Autumn },
    AlaCarte { name: "牡蠣のグラタン", price: 2200, season: Season::Winter },
    AlaCarte { name: "牛ほほ肉の赤ワイン煮込み", price: 2800, season: Season::Winter },
    AlaCarte { name: "本日の鮮魚のポワレ", price: 2600, season: Season::All },
];

const DRINKS: &[(&str, u32)] = &[
    ("グラスワイン（赤/白）", 900),
    ("ボトルワイン", 4800),
    ("クラフトビール", 800),
    ("自家製レモネード", 600),
    ("コーヒー / 紅茶", 500),
];

/// メニューページ。コースは予約ウィザードへコース指定付きで遷移する
#[component]
pub fn MenuPage() -> impl IntoView {
    let navigate = use_navigate();
    let (season, set_season) = signal(Season::All);

    view! {
        <h1 class="text-2xl font-bold">"メニュー"</h1>

        <section class="mt-6">
            <h2 class="text-xl font-semibold">"コース"</h2>
            <div class="mt-4 grid sm:grid-cols-2 gap-4">
                {CATALOG
                    .iter()
                    .filter(|c| c.price > 0)
                    .map(|c| {
                        let navigate = navigate.clone();
                        // 遷移先にコース ID を載せ、ウィザード側で選択済みにする
                        let href = format!("/reserve?course_id={}", c.id);
                        view! {
                            <div class="bg-white border rounded-lg p-5 flex flex-col">
                                <div class="flex items-start justify-between gap-3">
                                    <div>
                                        <div class="flex items-center gap-2">
                                            <h3 class="font-semibold">{c.name}</h3>
                                            {c.badge.map(|b| view! {
                                                <span class="text-[11px] px-2 py-0.5 rounded-full bg-amber-100 text-amber-700 border border-amber-200">
                                                    {b}
                                                </span>
                                            })}
                                        </div>
                                        <p class="text-sm text-stone-600 mt-2">{c.desc}</p>
                                    </div>
                                    <div class="font-bold tabular-nums whitespace-nowrap">
                                        {format_yen(c.price)}
                                    </div>
                                </div>
                                <a
                                    href=href.clone()
                                    class="mt-4 self-start px-4 py-2 rounded bg-stone-900 text-white text-sm"
                                    on:click=move |ev: leptos::web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        navigate(&href);
                                    }
                                >
                                    "このコースで予約"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="mt-10">
            <div class="flex items-center justify-between flex-wrap gap-3">
                <h2 class="text-xl font-semibold">"アラカルト"</h2>
                <div class="flex gap-1">
                    {[Season::All, Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
                        .into_iter()
                        .map(|s| {
                            let active = move || season.get() == s;
                            view! {
                                <button
                                    class=move || {
                                        if active() {
                                            "px-3 py-1 rounded-full text-sm bg-stone-900 text-white"
                                        } else {
                                            "px-3 py-1 rounded-full text-sm bg-white border text-stone-700"
                                        }
                                    }
                                    on:click=move |_| set_season.set(s)
                                >
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <ul class="mt-4 bg-white border rounded-lg divide-y">
                {move || {
                    let current = season.get();
                    ALA_CARTE
                        .iter()
                        .filter(|item| {
                            current == Season::All
                                || item.season == current
                                || item.season == Season::All
                        })
                        .map(|item| {
                            view! {
                                <li class="flex items-center justify-between px-4 py-3">
                                    <span>{item.name}</span>
                                    <span class="tabular-nums text-stone-700">
                                        {format_yen(item.price)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>

        <section class="mt-10">
            <h2 class="text-xl font-semibold">"ドリンク"</h2>
            <ul class="mt-4 bg-white border rounded-lg divide-y">
                {DRINKS
                    .iter()
                    .map(|(name, price)| {
                        view! {
                            <li class="flex items-center justify-between px-4 py-3">
                                <span>{*name}</span>
                                <span class="tabular-nums text-stone-700">{format_yen(*price)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="mt-2 text-xs text-stone-500">"表示はすべて税込です。"</p>
        </section>
    }
}
