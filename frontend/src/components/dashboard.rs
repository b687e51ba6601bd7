use crate::api::Api;
use crate::auth::{SessionStatus, use_session};
use crate::components::Modal;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use saveur_shared::course::resolve_course;
use saveur_shared::dashboard::{DashboardState, advisory_total, build_rows};
use saveur_shared::models::{ReservationStatus, format_created_at, format_yen};
use std::time::Duration;

/// 予約一覧ダッシュボード
///
/// 予約と時間帯を並行取得し、両方そろってから突合して表示する。
/// キャンセルはサーバ確認後にローカルの該当行だけ差し替える（一覧の再取得はしない）。
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_ctx = use_session();
    let status = session_ctx.status_signal();
    let navigate = use_navigate();

    let state = RwSignal::new(DashboardState::default());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (detail_id, set_detail_id) = signal(Option::<i64>::None);
    let (toast, set_toast) = signal(Option::<String>::None);
    // トーストの世代。古いタイマーが新しいトーストを消さないように
    let toast_gen = StoredValue::new(0u32);

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if status.get() == SessionStatus::Guest {
                navigate("/login");
            }
        }
    });

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    // 予約一覧と時間帯は並行に取得し、両方の成功を待ってから突合する
    spawn_local(async move {
        let (reservations, slots) = futures::join!(Api.my_reservations(), Api.timeslots());
        if !alive.get_value() {
            return;
        }
        match (reservations, slots) {
            (Ok(reservations), Ok(slots)) => {
                state.set(DashboardState::new(build_rows(reservations, &slots)));
            }
            _ => {
                set_load_error.set(Some("予約一覧の取得に失敗しました".to_string()));
            }
        }
        set_loading.set(false);
    });

    let show_toast = move |message: &str| {
        let generation = toast_gen.get_value() + 1;
        toast_gen.set_value(generation);
        set_toast.set(Some(message.to_string()));
        set_timeout(
            move || {
                if toast_gen.try_get_value() == Some(generation) {
                    set_toast.set(None);
                }
            },
            Duration::from_secs(2),
        );
    };

    let on_cancel = move |id: i64| {
        // 単一飛行：どれかの行のキャンセルが走っている間は受け付けない
        let started = state.try_update(|s| s.begin_cancel()).unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let result = Api.cancel_reservation(id).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(()) => {
                    state.update(|s| s.apply_cancel(id));
                    show_toast("予約をキャンセルしました");
                }
                Err(_) => {
                    show_toast("キャンセルに失敗しました");
                }
            }
            state.update(|s| s.finish_cancel());
        });
    };

    let modal_open = Signal::derive(move || detail_id.get().is_some());

    view! {
        <Show when=move || status.get() != SessionStatus::Probing fallback=|| view! {
            <div class="py-24 text-center text-stone-500">"読み込み中…"</div>
        }>
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">"予約一覧"</h1>
                <button
                    class="px-4 py-2 rounded bg-stone-900 text-white"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/reserve")
                    }
                >
                    "新しく予約する"
                </button>
            </div>

            {move || toast.get().map(|m| view! {
                <div class="fixed bottom-6 right-6 bg-stone-900 text-white px-4 py-2 rounded shadow-lg">
                    {m}
                </div>
            })}

            {move || load_error.get().map(|m| view! {
                <div class="mt-4 p-3 bg-red-50 text-red-700 border border-red-200 rounded">{m}</div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="mt-6 text-stone-600">"読み込み中..."</div> }
            >
                <Show
                    when=move || state.with(|s| !s.rows.is_empty())
                    fallback=|| view! {
                        <div class="mt-6 p-8 border rounded text-center text-stone-600 bg-white">
                            "まだ予約はありません。"
                        </div>
                    }
                >
                    <div class="mt-6 overflow-x-auto bg-white border rounded">
                        <table class="w-full text-sm">
                            <thead class="bg-stone-100 text-left">
                                <tr>
                                    <th class="px-3 py-2">"日付"</th>
                                    <th class="px-3 py-2">"時間"</th>
                                    <th class="px-3 py-2">"人数"</th>
                                    <th class="px-3 py-2">"コース"</th>
                                    <th class="px-3 py-2">"状態"</th>
                                    <th class="px-3 py-2"></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.rows.clone())
                                    key=|row| (row.reservation.id, row.reservation.status)
                                    children=move |row| {
                                        let id = row.reservation.id;
                                        let course = resolve_course(&row.reservation);
                                        let canceled =
                                            row.reservation.status == ReservationStatus::Canceled;
                                        let time_label = row.time_label();
                                        let status_label = row.status_label();
                                        view! {
                                            <tr class=move || {
                                                if canceled { "border-t text-stone-400" } else { "border-t" }
                                            }>
                                                <td class="px-3 py-2">{row.reservation.date.clone()}</td>
                                                <td class="px-3 py-2">{time_label}</td>
                                                <td class="px-3 py-2">{row.reservation.party_size} "名"</td>
                                                <td class="px-3 py-2">{course.label()}</td>
                                                <td class="px-3 py-2">
                                                    <span class=move || {
                                                        if canceled {
                                                            "px-2 py-0.5 rounded-full text-xs bg-stone-100 text-stone-500"
                                                        } else {
                                                            "px-2 py-0.5 rounded-full text-xs bg-green-100 text-green-700"
                                                        }
                                                    }>{status_label}</span>
                                                </td>
                                                <td class="px-3 py-2 text-right whitespace-nowrap">
                                                    <button
                                                        class="text-amber-700 underline mr-3"
                                                        on:click=move |_| set_detail_id.set(Some(id))
                                                    >
                                                        "詳細"
                                                    </button>
                                                    <Show when=move || !canceled>
                                                        <button
                                                            class="text-red-600 underline disabled:opacity-50"
                                                            disabled=move || state.with(|s| s.working)
                                                            on:click=move |_| on_cancel(id)
                                                        >
                                                            "キャンセル"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <Modal
                open=modal_open
                on_close=Callback::new(move |_| set_detail_id.set(None))
                title="予約の詳細"
            >
                {move || {
                    detail_id
                        .get()
                        .and_then(|id| state.with(|s| s.row(id).cloned()))
                        .map(|row| {
                            let course = resolve_course(&row.reservation);
                            let total = advisory_total(course.price, row.reservation.party_size);
                            let created = row
                                .reservation
                                .created_at
                                .as_deref()
                                .map(format_created_at);
                            view! {
                                <dl class="space-y-2 text-sm">
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"予約ID"</dt>
                                        <dd>{row.reservation.id}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"日付"</dt>
                                        <dd>{row.reservation.date.clone()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"時間"</dt>
                                        <dd>{row.time_label()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"人数"</dt>
                                        <dd>{row.reservation.party_size} "名"</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"コース"</dt>
                                        <dd>{course.label()}</dd>
                                    </div>
                                    {course.price.map(|p| view! {
                                        <div class="flex justify-between">
                                            <dt class="text-stone-500">"コース料金"</dt>
                                            <dd>{format_yen(p)} " / 名"</dd>
                                        </div>
                                    })}
                                    {total.map(|t| view! {
                                        <div class="flex justify-between font-semibold">
                                            <dt>"概算合計"</dt>
                                            <dd>{format_yen(t)}</dd>
                                        </div>
                                        <p class="text-xs text-stone-500 text-right">
                                            "※ 税込・サービス料なし"
                                        </p>
                                    })}
                                    <div class="flex justify-between">
                                        <dt class="text-stone-500">"状態"</dt>
                                        <dd>{row.status_label()}</dd>
                                    </div>
                                    {created.map(|c| view! {
                                        <div class="flex justify-between">
                                            <dt class="text-stone-500">"受付日時"</dt>
                                            <dd>{c}</dd>
                                        </div>
                                    })}
                                </dl>
                            }
                        })
                }}
            </Modal>
        </Show>
    }
}
