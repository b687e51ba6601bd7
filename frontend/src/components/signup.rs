use crate::auth::{signup, use_session};
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use saveur_shared::SignupRequest;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session_ctx = use_session();
    let navigate = use_navigate();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let server_error = move || session_ctx.state.with(|s| s.error.clone());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_local_error.set(None);

            if email.with(|v| v.trim().is_empty())
                || password.with(|v| v.is_empty())
                || full_name.with(|v| v.trim().is_empty())
            {
                set_local_error.set(Some(
                    "必須項目（氏名/メール/パスワード）を入力してください。".to_string(),
                ));
                return;
            }
            if password.with(|v| v.chars().count() < 8) {
                set_local_error.set(Some("パスワードは8文字以上を推奨します。".to_string()));
                return;
            }
            if submitting.get() {
                return;
            }

            set_submitting.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                let phone = phone.get_untracked();
                let req = SignupRequest {
                    email: email.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                    full_name: full_name.get_untracked().trim().to_string(),
                    phone: if phone.trim().is_empty() {
                        None
                    } else {
                        Some(phone)
                    },
                };
                if signup(&session_ctx, req).await {
                    navigate("/dashboard");
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="max-w-md mx-auto">
            <h1 class="text-xl font-bold">"会員登録"</h1>

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
                    <label class="block text-sm mb-1" for="full_name">"氏名"</label>
                    <input
                        id="full_name"
                        class="w-full border rounded px-3 py-2"
                        prop:value=full_name
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        required
                    />
                </div>
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
                    <label class="block text-sm mb-1" for="phone">"電話番号（任意）"</label>
                    <input
                        id="phone"
                        class="w-full border rounded px-3 py-2"
                        prop:value=phone
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
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
                        autocomplete="new-password"
                        required
                    />
                    <p class="mt-1 text-xs text-stone-500">"8文字以上を推奨します。"</p>
                </div>
                <button
                    class="w-full rounded bg-stone-900 text-white py-2 disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "送信中…" } else { "登録する" }}
                </button>
            </form>
        </div>
    }
}
