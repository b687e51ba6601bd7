use leptos::prelude::*;
use saveur_shared::models::format_yen;

struct Event {
    date: &'static str,
    title: &'static str,
    body: &'static str,
    fee: u32,
    seats: &'static str,
}

const EVENTS: &[Event] = &[
    Event {
        date: "2025-09-23",
        title: "自然派ワインの会 vol.12",
        body: "ロワールの造り手を迎え、6種のワインと小皿料理を合わせます。",
        fee: 8500,
        seats: "限定12席",
    },
    Event {
        date: "2025-10-13",
        title: "きのこづくしの一夜",
        body: "秋の最盛期、前菜からデザートまできのこ尽くしの特別コース。",
        fee: 11000,
        seats: "限定16席",
    },
    Event {
        date: "2025-12-24",
        title: "クリスマスディナー",
        body: "二夜限りの特別献立。シャンパーニュの乾杯付き。",
        fee: 15000,
        seats: "要予約",
    },
];

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"イベント"</h1>
        <p class="mt-1 text-stone-600">"イベントのご予約はお電話にて承ります。"</p>
        <ul class="mt-6 space-y-4 max-w-2xl">
            {EVENTS
                .iter()
                .map(|e| {
                    view! {
                        <li class="bg-white border rounded-lg p-5">
                            <div class="flex items-center justify-between">
                                <time class="text-sm text-stone-500">{e.date}</time>
                                <span class="text-xs px-2 py-0.5 rounded-full bg-amber-100 text-amber-700 border border-amber-200">
                                    {e.seats}
                                </span>
                            </div>
                            <h2 class="mt-2 font-semibold">{e.title}</h2>
                            <p class="mt-1 text-sm text-stone-700">{e.body}</p>
                            <p class="mt-2 font-semibold tabular-nums">
                                {format_yen(e.fee)} <span class="text-xs font-normal text-stone-500">" / 名（税込）"</span>
                            </p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
