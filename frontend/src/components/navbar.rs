use crate::auth::{SessionStatus, logout, use_session};
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ヘッダナビゲーション。右側はセッション状態で出し分ける
#[component]
pub fn Navbar() -> impl IntoView {
    let session_ctx = use_session();
    let status = session_ctx.status_signal();
    let navigate = use_navigate();

    let nav_link = {
        let navigate = navigate.clone();
        move |to: &'static str, label: &'static str| {
            let navigate = navigate.clone();
            view! {
                <a
                    href=to
                    class="px-2 py-1 text-sm text-stone-600 hover:text-stone-900"
                    on:click=move |ev: leptos::web_sys::MouseEvent| {
                        ev.prevent_default();
                        navigate(to);
                    }
                >
                    {label}
                </a>
            }
        }
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                logout(&session_ctx).await;
                navigate("/");
            });
        }
    };

    view! {
        <header class="bg-white border-b sticky top-0 z-40">
            <div class="max-w-5xl mx-auto px-4 h-14 flex items-center justify-between">
                <a
                    href="/"
                    class="font-bold text-lg tracking-wide"
                    on:click={
                        let navigate = navigate.clone();
                        move |ev: leptos::web_sys::MouseEvent| {
                            ev.prevent_default();
                            navigate("/");
                        }
                    }
                >
                    "ビストロ・サヴール"
                </a>

                <nav class="hidden md:flex items-center gap-1">
                    {nav_link("/menu", "メニュー")}
                    {nav_link("/about", "こだわり")}
                    {nav_link("/gallery", "ギャラリー")}
                    {nav_link("/news", "お知らせ")}
                    {nav_link("/events", "イベント")}
                    {nav_link("/access", "アクセス")}
                    {nav_link("/contact", "お問い合わせ")}
                </nav>

                <div class="flex items-center gap-2">
                    <Show
                        when=move || status.get() == SessionStatus::SignedIn
                        fallback={
                            let navigate = navigate.clone();
                            move || {
                                let navigate = navigate.clone();
                                view! {
                                    <a
                                        href="/login"
                                        class="text-sm text-stone-600 hover:text-stone-900"
                                        on:click=move |ev: leptos::web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            navigate("/login");
                                        }
                                    >
                                        "ログイン"
                                    </a>
                                }
                            }
                        }
                    >
                        {
                            let navigate = navigate.clone();
                            let on_logout = on_logout.clone();
                            view! {
                                <a
                                    href="/dashboard"
                                    class="text-sm text-stone-600 hover:text-stone-900"
                                    on:click=move |ev: leptos::web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        navigate("/dashboard");
                                    }
                                >
                                    "予約一覧"
                                </a>
                                <button
                                    class="text-sm text-stone-500 hover:text-stone-900"
                                    on:click=on_logout
                                >
                                    "ログアウト"
                                </button>
                            }
                        }
                    </Show>

                    <button
                        class="px-3 py-1.5 rounded bg-stone-900 text-white text-sm hover:bg-stone-700"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/reserve")
                        }
                    >
                        "予約する"
                    </button>
                </div>
            </div>
        </header>
    }
}
