use leptos::prelude::*;

/// `<dialog>` ベースの汎用モーダル。
/// 開閉は open 信号で制御し、close イベント（ESC 等）は on_close で親へ返す
#[component]
pub fn Modal(
    open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog
            class="rounded-lg shadow-xl p-0 w-full max-w-md backdrop:bg-black/40"
            node_ref=dialog_ref
            on:close=move |_| on_close.run(())
        >
            <div class="p-5">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">{title}</h3>
                    <button
                        class="text-stone-400 hover:text-stone-700"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="mt-4">{children()}</div>
            </div>
        </dialog>
    }
}
