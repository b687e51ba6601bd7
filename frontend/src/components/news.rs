use leptos::prelude::*;

struct NewsItem {
    date: &'static str,
    tag: &'static str,
    title: &'static str,
    body: &'static str,
}

const ITEMS: &[NewsItem] = &[
    NewsItem {
        date: "2025-08-20",
        tag: "メニュー",
        title: "秋のコースが始まります",
        body: "9月1日より、きのこと鴨を中心にした秋の献立に切り替わります。",
    },
    NewsItem {
        date: "2025-08-05",
        tag: "営業",
        title: "夏季休業のお知らせ",
        body: "8月12日（火）〜8月15日（金）は夏季休業とさせていただきます。",
    },
    NewsItem {
        date: "2025-07-10",
        tag: "お知らせ",
        title: "オンライン予約を開始しました",
        body: "会員登録のうえ、空き時間からそのままご予約いただけます。",
    },
];

#[component]
pub fn NewsPage() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"お知らせ"</h1>
        <ul class="mt-6 space-y-4 max-w-2xl">
            {ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <li class="bg-white border rounded-lg p-5">
                            <div class="flex items-center gap-3 text-sm">
                                <time class="text-stone-500">{item.date}</time>
                                <span class="px-2 py-0.5 rounded-full bg-stone-100 text-stone-600 text-xs">
                                    {item.tag}
                                </span>
                            </div>
                            <h2 class="mt-2 font-semibold">{item.title}</h2>
                            <p class="mt-1 text-sm text-stone-700">{item.body}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
