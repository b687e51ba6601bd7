use crate::web::router::use_navigate;
use leptos::prelude::*;
use saveur_shared::course::CATALOG;
use saveur_shared::models::format_yen;

/// トップページ。ヒーロー + おすすめコース + 店舗情報への導線
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let go = {
        let navigate = navigate.clone();
        move |path: &'static str| {
            let navigate = navigate.clone();
            move |ev: leptos::web_sys::MouseEvent| {
                ev.prevent_default();
                navigate(path);
            }
        }
    };

    view! {
        <section class="rounded-2xl bg-stone-900 text-stone-50 px-8 py-16 text-center">
            <p class="text-amber-400 tracking-widest text-sm">"KAGURAZAKA, TOKYO"</p>
            <h1 class="text-4xl font-bold mt-3">"ビストロ・サヴール"</h1>
            <p class="mt-4 text-stone-300 max-w-xl mx-auto">
                "神楽坂の路地裏にある小さなフレンチビストロ。旬の食材を、気取らない一皿に。"
            </p>
            <div class="mt-8 flex justify-center gap-3">
                <a
                    href="/reserve"
                    class="px-6 py-3 rounded bg-amber-500 text-stone-900 font-semibold hover:bg-amber-400"
                    on:click=go("/reserve")
                >
                    "予約する"
                </a>
                <a
                    href="/menu"
                    class="px-6 py-3 rounded border border-stone-500 hover:border-stone-300"
                    on:click=go("/menu")
                >
                    "メニューを見る"
                </a>
            </div>
        </section>

        <section class="mt-12">
            <h2 class="text-xl font-bold">"コースのご案内"</h2>
            <div class="mt-4 grid sm:grid-cols-3 gap-4">
                {CATALOG
                    .iter()
                    .filter(|c| c.price > 0)
                    .map(|c| {
                        view! {
                            <div class="bg-white border rounded-lg p-5">
                                <div class="flex items-center gap-2">
                                    <h3 class="font-semibold">{c.name}</h3>
                                    {c.badge.map(|b| view! {
                                        <span class="text-[11px] px-2 py-0.5 rounded-full bg-amber-100 text-amber-700 border border-amber-200">
                                            {b}
                                        </span>
                                    })}
                                </div>
                                <p class="text-sm text-stone-600 mt-2">{c.desc}</p>
                                <p class="mt-3 font-bold tabular-nums">{format_yen(c.price)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="mt-12">
            <h2 class="text-xl font-bold">"お客様の声"</h2>
            <div class="mt-4 grid md:grid-cols-3 gap-4">
                {[
                    ("K.S", "前菜からデザートまでバランスが素晴らしい。季節ごとに通いたい。"),
                    ("M.T", "ワインペアリングが的確で、料理がさらに引き立った。"),
                    ("Y.H", "落ち着いた雰囲気で記念日に最適。サービスも心地よい。"),
                ]
                    .into_iter()
                    .map(|(name, text)| {
                        view! {
                            <blockquote class="bg-white border rounded-lg p-5">
                                <p class="text-sm text-stone-700 leading-relaxed">
                                    "“" {text} "”"
                                </p>
                                <footer class="mt-3 text-xs text-stone-500">
                                    "— " {name} " 様"
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="mt-12 grid sm:grid-cols-3 gap-4">
            {[
                ("/about", "私たちについて", "シェフの経歴とお店のこだわり"),
                ("/access", "アクセス", "神楽坂駅から徒歩4分"),
                ("/news", "お知らせ", "営業日・メニュー改定のご案内"),
            ]
                .into_iter()
                .map(|(path, title, desc)| {
                    let navigate = navigate.clone();
                    view! {
                        <a
                            href=path
                            class="block bg-white border rounded-lg p-5 hover:border-stone-900"
                            on:click=move |ev: leptos::web_sys::MouseEvent| {
                                ev.prevent_default();
                                navigate(path);
                            }
                        >
                            <h3 class="font-semibold">{title}</h3>
                            <p class="text-sm text-stone-600 mt-1">{desc}</p>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}
