use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    // ニュースレター登録は現状スタブ（送信先なし）。押しても案内を出すだけ
    let (notice, set_notice) = signal(false);

    view! {
        <footer class="bg-stone-900 text-stone-300 mt-12">
            <div class="max-w-5xl mx-auto px-4 py-10 grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <div class="font-bold text-white text-base">"ビストロ・サヴール"</div>
                    <p class="mt-2 leading-relaxed">
                        "東京・神楽坂の小さなフレンチビストロ。"<br />
                        "季節の食材を、気取らずに。"
                    </p>
                </div>
                <div>
                    <div class="font-semibold text-white">"営業時間"</div>
                    <ul class="mt-2 space-y-1">
                        <li>"ランチ 11:30 - 14:30（L.O. 13:30）"</li>
                        <li>"ディナー 17:30 - 22:00（L.O. 21:00）"</li>
                        <li>"定休日：月曜・第2火曜"</li>
                    </ul>
                </div>
                <div>
                    <div class="font-semibold text-white">"ニュースレター"</div>
                    <p class="mt-2">"季節メニューやイベントのご案内をお届けします。"</p>
                    <div class="mt-3 flex gap-2">
                        <input
                            type="email"
                            placeholder="メールアドレス"
                            class="flex-1 rounded px-3 py-1.5 text-stone-900"
                        />
                        <button
                            class="px-3 py-1.5 rounded bg-amber-600 text-white hover:bg-amber-500"
                            on:click=move |_| set_notice.set(true)
                        >
                            "登録"
                        </button>
                    </div>
                    <Show when=move || notice.get()>
                        <p class="mt-2 text-xs text-amber-300">
                            "配信の準備中です。開始までしばらくお待ちください。"
                        </p>
                    </Show>
                </div>
            </div>
            <div class="border-t border-stone-700 py-4 text-center text-xs text-stone-500">
                "© 2025 Bistro Saveur"
            </div>
        </footer>
    }
}
