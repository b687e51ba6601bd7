use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"私たちについて"</h1>
        <div class="mt-6 space-y-6 max-w-2xl">
            <section class="bg-white border rounded-lg p-6">
                <h2 class="font-semibold text-lg">"お店のこと"</h2>
                <p class="mt-3 text-stone-700 leading-relaxed">
                    "ビストロ・サヴールは2016年、神楽坂の路地裏に開いた16席の小さなフレンチビストロです。"
                    "かしこまらず、それでいて丁寧に。日々の食事の延長にあるフランス料理を目指しています。"
                </p>
            </section>
            <section class="bg-white border rounded-lg p-6">
                <h2 class="font-semibold text-lg">"シェフ"</h2>
                <p class="mt-3 text-stone-700 leading-relaxed">
                    "シェフの高津は、リヨンとパリのビストロで8年間修行したのち帰国。"
                    "市場に毎朝通い、その日に良いと思った食材だけで献立を組み立てます。"
                </p>
            </section>
            <section class="bg-white border rounded-lg p-6">
                <h2 class="font-semibold text-lg">"こだわり"</h2>
                <ul class="mt-3 text-stone-700 space-y-2 list-disc list-inside">
                    <li>"野菜は契約農家から直送の朝採れのみ"</li>
                    <li>"ソースはすべて注文を受けてから仕上げます"</li>
                    <li>"ワインは自然派を中心に常時40種ほど"</li>
                </ul>
            </section>
        </div>
    }
}
