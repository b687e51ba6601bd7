use leptos::prelude::*;

#[component]
pub fn AccessPage() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"アクセス"</h1>
        <div class="mt-6 grid md:grid-cols-2 gap-6 max-w-3xl">
            <div class="bg-white border rounded-lg p-6">
                <dl class="space-y-3 text-sm">
                    <div>
                        <dt class="text-stone-500">"住所"</dt>
                        <dd class="mt-0.5">"〒162-0825 東京都新宿区神楽坂3-2-11 1F"</dd>
                    </div>
                    <div>
                        <dt class="text-stone-500">"最寄り駅"</dt>
                        <dd class="mt-0.5">
                            "東京メトロ東西線 神楽坂駅 徒歩4分 / JR 飯田橋駅 徒歩8分"
                        </dd>
                    </div>
                    <div>
                        <dt class="text-stone-500">"電話"</dt>
                        <dd class="mt-0.5">"03-1234-5678"</dd>
                    </div>
                    <div>
                        <dt class="text-stone-500">"営業時間"</dt>
                        <dd class="mt-0.5">
                            "ランチ 11:30 - 14:30（L.O. 13:30）" <br />
                            "ディナー 17:30 - 22:00（L.O. 21:00）"
                        </dd>
                    </div>
                    <div>
                        <dt class="text-stone-500">"定休日"</dt>
                        <dd class="mt-0.5">"月曜・第2火曜"</dd>
                    </div>
                </dl>
            </div>
            <div class="rounded-lg bg-stone-200 flex items-center justify-center min-h-64">
                <span class="text-stone-500 text-sm">"MAP"</span>
            </div>
        </div>
    }
}
