use leptos::prelude::*;

/// お問い合わせフォーム。送信先は未接続で、受付メッセージを出すだけ
#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (notice, set_notice) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.with(|v| v.trim().is_empty())
            || email.with(|v| v.trim().is_empty())
            || body.with(|v| v.trim().is_empty())
        {
            set_notice.set(Some("すべての項目を入力してください。".to_string()));
            return;
        }
        set_notice.set(Some(
            "お問い合わせフォームは準備中です。お急ぎの場合はお電話（03-1234-5678）にてご連絡ください。"
                .to_string(),
        ));
    };

    view! {
        <div class="max-w-xl mx-auto">
            <h1 class="text-2xl font-bold">"お問い合わせ"</h1>
            <p class="mt-1 text-stone-600">
                "ご予約に関するお問い合わせは予約ページをご利用ください。"
            </p>

            {move || notice.get().map(|m| view! {
                <div class="mt-4 rounded bg-amber-50 border border-amber-200 px-3 py-2 text-sm text-amber-800">
                    {m}
                </div>
            })}

            <form class="mt-6 space-y-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm mb-1" for="contact_name">"お名前"</label>
                    <input
                        id="contact_name"
                        class="w-full border rounded px-3 py-2"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="contact_email">"メールアドレス"</label>
                    <input
                        id="contact_email"
                        type="email"
                        class="w-full border rounded px-3 py-2"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="contact_body">"内容"</label>
                    <textarea
                        id="contact_body"
                        class="w-full border rounded px-3 py-2 min-h-32"
                        prop:value=body
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                        required
                    ></textarea>
                </div>
                <button class="px-5 py-2 rounded bg-stone-900 text-white">"送信"</button>
            </form>
        </div>
    }
}
