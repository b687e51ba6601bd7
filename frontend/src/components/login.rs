use crate::auth::{SessionStatus, login, use_session};
use crate::web::LocalStorage;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;

const STORAGE_EMAIL_KEY: &str = "saveur_last_email";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_ctx = use_session();
    let status = session_ctx.status_signal();
    let navigate = use_navigate();

    // 前回ログインしたメールアドレスだけ補完する（パスワードは保存しない）
    let (email, set_email) = signal(LocalStorage::get(STORAGE_EMAIL_KEY).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let server_error = move || session_ctx.state.with(|s| s.error.clone());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_local_error.set(None);

            if email.with(|e| e.trim().is_empty()) || password.with(|p| p.is_empty()) {
                set_local_error
                    .set(Some("メールアドレスとパスワードを入力してください。".to_string()));
                return;
            }
            if submitting.get() {
                return;
            }

            set_submitting.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                let addr = email.get_untracked().trim().to_string();
                let ok = login(&session_ctx, addr.clone(), password.get_untracked()).await;
                if ok {
                    LocalStorage::set(STORAGE_EMAIL_KEY, &addr);
                    navigate("/dashboard");
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <Show when=move || status.get() != SessionStatus::Probing fallback=|| view! {
            <div class="py-24 text-center text-stone-500">"読み込み中..."</div>
        }>
            <div class="max-w-md mx-auto">
                <h1 class="text-xl font-bold">"ログイン"</h1>

                {move || {
                    let msg = local_error.get().or_else(server_error);
                    msg.map(|m| view! {
                        <div class="mt-3 rounded bg-red-50 border border-red-200 px-3 py-2 text-sm text-red-700">
                            {m}
                        </div>
                    })
                }}

                <form class="mt-4 space-y-3" on:submit=on_submit>
                    <div>
                        <label class="block text-sm mb-1" for="email">"メールアドレス"</label>
                        <input
                            id="email"
                            type="email"
                            class="w-full border rounded px-3 py-2"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            autocomplete="email"
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="password">"パスワード"</label>
                        <input
                            id="password"
                            type="password"
                            class="w-full border rounded px-3 py-2"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            autocomplete="current-password"
                            required
                        />
                    </div>
                    <button
                        class="w-full rounded bg-stone-900 text-white py-2 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "送信中…" } else { "ログイン" }}
                    </button>
                </form>

                <p class="mt-4 text-sm text-stone-600">
                    "アカウントをお持ちでない方は "
                    <a
                        href="/signup"
                        class="text-amber-700 underline"
                        on:click={
                            let navigate = navigate.clone();
                            move |ev: leptos::web_sys::MouseEvent| {
                                ev.prevent_default();
                                navigate("/signup");
                            }
                        }
                    >
                        "会員登録"
                    </a>
                </p>
            </div>
        </Show>
    }
}
