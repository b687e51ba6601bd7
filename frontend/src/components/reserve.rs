use crate::api::Api;
use crate::auth::{SessionStatus, use_session};
use crate::web::router::{current_search, query_param, use_navigate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use saveur_shared::course::CATALOG;
use saveur_shared::models::format_yen;
use saveur_shared::wizard::{WizardDraft, WizardStep, sort_slots, submit_error_message};

/// 今日の日付 "YYYY-MM-DD"（ブラウザのローカル時刻）
fn today_ymd() -> String {
    let d = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        d.get_full_year(),
        d.get_month() + 1,
        d.get_date()
    )
}

/// 予約ウィザード（条件選択 → 時間選択 → 確認/完了）
#[component]
pub fn ReservePage() -> impl IntoView {
    let session_ctx = use_session();
    let status = session_ctx.status_signal();
    let navigate = use_navigate();

    let draft = RwSignal::new({
        let mut d = WizardDraft::new(today_ymd());
        // メニューページからの遷移に付くコース指定。ID が名前より優先
        let search = current_search();
        let course_id = query_param(&search, "course_id");
        let course_name = query_param(&search, "course");
        d.preselect(course_id.as_deref(), course_name.as_deref());
        d
    });

    let (slots, set_slots) = signal(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 未ログイン確定ならログインへ（プローブ中は待機表示に任せる）
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if status.get() == SessionStatus::Guest {
                navigate("/login");
            }
        }
    });

    // 時間帯の取得はウィザード入場時に一度だけ。
    // 取得完了時にページが破棄済みなら結果を捨てる
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));
    spawn_local(async move {
        match Api.timeslots().await {
            Ok(mut data) => {
                if alive.get_value() {
                    sort_slots(&mut data);
                    set_slots.set(data);
                }
            }
            Err(_) => {
                if alive.get_value() {
                    set_error.set(Some("スロット取得に失敗しました".to_string()));
                }
            }
        }
        if alive.get_value() {
            set_loading.set(false);
        }
    });

    let step = move || draft.with(|d| d.step);
    let done_id = move || draft.with(|d| d.done_id);
    let can_next = move || draft.with(|d| d.can_advance());
    let submitting = move || draft.with(|d| d.submitting);

    let on_submit = move || {
        // 単一飛行ガード：実行中の二度目の送信は無視する
        let started = draft.try_update(|d| d.begin_submit()).unwrap_or(false);
        if !started {
            return;
        }
        set_error.set(None);

        let Some(payload) = draft.with_untracked(|d| d.build_payload()) else {
            draft.update(|d| d.finish_submit());
            return;
        };

        spawn_local(async move {
            let result = Api.create_reservation(&payload).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(env) => {
                    draft.update(|d| d.complete(env.reservation.id));
                }
                Err(e) => {
                    // 既知のコードだけ個別文言、それ以外は汎用文言
                    set_error.set(Some(submit_error_message(e.code()).to_string()));
                }
            }
            draft.update(|d| d.finish_submit());
        });
    };

    let selected_summary = move || {
        draft.with(|d| {
            let course = d
                .selected_course()
                .map(|c| format!("{}（{}）", c.name, format_yen(c.price)))
                .unwrap_or_else(|| "—".to_string());
            let time = d
                .selected
                .as_ref()
                .map(|s| format!("{} - {}", s.start_time, s.end_time))
                .unwrap_or_else(|| "—".to_string());
            (d.date.clone(), d.party_size, course, time)
        })
    };

    view! {
        <Show when=move || status.get() != SessionStatus::Probing fallback=|| view! {
            <div class="py-24 text-center text-stone-500">"読み込み中…"</div>
        }>
            <div class="max-w-3xl mx-auto">
                <h1 class="text-2xl font-bold">"予約"</h1>
                <p class="text-stone-600 mt-1">"日付・人数・コースを選んで、空き時間から予約します。"</p>

                // ステッパー
                <div class="flex items-center gap-3 mt-6">
                    {[
                        (WizardStep::Conditions, "1", "条件選択"),
                        (WizardStep::TimeSelect, "2", "時間選択"),
                        (WizardStep::Confirm, "3", "確認/完了"),
                    ]
                        .into_iter()
                        .map(|(s, num, label)| {
                            let active = move || step() == s;
                            view! {
                                <div class="flex items-center gap-2">
                                    <div class=move || {
                                        if active() {
                                            "w-8 h-8 rounded-full flex items-center justify-center bg-stone-900 text-white"
                                        } else {
                                            "w-8 h-8 rounded-full flex items-center justify-center bg-stone-200 text-stone-700"
                                        }
                                    }>{num}</div>
                                    <span class=move || {
                                        if active() { "font-semibold" } else { "text-stone-600" }
                                    }>{label}</span>
                                    {(s != WizardStep::Confirm)
                                        .then(|| view! { <span class="text-stone-300">"—"</span> })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {move || error.get().map(|m| view! {
                    <div class="mt-4 p-3 bg-red-50 text-red-700 border border-red-200 rounded">{m}</div>
                })}

                // Step 1: 条件
                <Show when=move || step() == WizardStep::Conditions>
                    <section class="mt-6 space-y-5">
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <label class="block">
                                <span class="text-sm text-stone-700">"日付"</span>
                                <input
                                    type="date"
                                    class="mt-1 w-full border rounded px-3 py-2"
                                    prop:value=move || draft.with(|d| d.date.clone())
                                    min=move || draft.with(|d| d.min_date.clone())
                                    on:input=move |ev| {
                                        // 日付を変えたら選択済みスロットは持ち越さない
                                        draft.update(|d| d.set_date(event_target_value(&ev)));
                                        set_error.set(None);
                                    }
                                />
                            </label>
                            <label class="block">
                                <span class="text-sm text-stone-700">"人数"</span>
                                <select
                                    class="mt-1 w-full border rounded px-3 py-2"
                                    on:change=move |ev| {
                                        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                            draft.update(|d| d.set_party_size(n));
                                        }
                                        set_error.set(None);
                                    }
                                >
                                    {(1u32..=10)
                                        .map(|n| view! {
                                            <option
                                                value=n.to_string()
                                                selected=move || draft.with(|d| d.party_size == n)
                                            >
                                                {format!("{} 名", n)}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>

                        // コース選択
                        <fieldset class="mt-4">
                            <legend class="flex items-center justify-between w-full">
                                <h2 class="font-semibold">"コース選択"</h2>
                                <Show when=move || draft.with(|d| d.course_id.is_empty())>
                                    <span class="text-xs text-red-600">"※ コースをお選びください"</span>
                                </Show>
                            </legend>
                            <ul class="mt-3 grid sm:grid-cols-2 gap-3">
                                {CATALOG
                                    .iter()
                                    .map(|c| {
                                        let active = move || draft.with(|d| d.course_id == c.id);
                                        view! {
                                            <li>
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if active() {
                                                            "block w-full text-left border rounded-lg p-4 ring-2 ring-stone-900 border-stone-900 bg-stone-50"
                                                        } else {
                                                            "block w-full text-left border rounded-lg p-4 hover:border-stone-900"
                                                        }
                                                    }
                                                    on:click=move |_| {
                                                        draft.update(|d| d.select_course(c.id));
                                                        set_error.set(None);
                                                    }
                                                >
                                                    <div class="flex items-start justify-between gap-3">
                                                        <div class="min-w-0">
                                                            <div class="flex items-center gap-2">
                                                                <span class="font-medium truncate">{c.name}</span>
                                                                {c.badge.map(|b| view! {
                                                                    <span class="text-[11px] px-2 py-0.5 rounded-full bg-amber-100 text-amber-700 border border-amber-200 whitespace-nowrap">
                                                                        {b}
                                                                    </span>
                                                                })}
                                                            </div>
                                                            <p class="text-sm text-stone-600 mt-1">{c.desc}</p>
                                                        </div>
                                                        <div class="shrink-0 text-right">
                                                            <div class="font-semibold tabular-nums">{format_yen(c.price)}</div>
                                                            <div class="text-[11px] text-stone-500">"お一人様"</div>
                                                        </div>
                                                    </div>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </fieldset>

                        <div class="flex gap-2">
                            <button
                                class="px-4 py-2 rounded bg-stone-900 text-white disabled:opacity-50"
                                disabled=move || !can_next()
                                on:click=move |_| {
                                    draft.update(|d| { d.advance(); });
                                    set_error.set(None);
                                }
                            >
                                "時間を選ぶ"
                            </button>
                        </div>
                    </section>
                </Show>

                // Step 2: 時間選択
                <Show when=move || step() == WizardStep::TimeSelect>
                    <section class="mt-6">
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <div class="text-stone-600">"読み込み中..."</div> }
                        >
                            <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-3">
                                <For
                                    each=move || slots.get()
                                    key=|s| s.id
                                    children=move |slot| {
                                        let id = slot.id;
                                        let active = move || {
                                            draft.with(|d| d.selected.as_ref().map(|s| s.id) == Some(id))
                                        };
                                        let label = format!("{} - {}", slot.start_time, slot.end_time);
                                        // remaining は日付指定フェッチのときだけ入る参考値
                                        let capacity = match slot.remaining {
                                            Some(n) => format!("定員 {} 名 / 残り {} 席", slot.capacity, n),
                                            None => format!("定員 {} 名", slot.capacity),
                                        };
                                        view! {
                                            <button
                                                class=move || {
                                                    if active() {
                                                        "border rounded p-3 text-left ring-2 ring-stone-900 border-stone-900"
                                                    } else {
                                                        "border rounded p-3 text-left hover:border-stone-900"
                                                    }
                                                }
                                                on:click=move |_| {
                                                    draft.update(|d| d.select_slot(slot.clone()));
                                                    set_error.set(None);
                                                }
                                            >
                                                <div class="font-semibold">{label.clone()}</div>
                                                <div class="text-xs text-stone-600 mt-1">{capacity.clone()}</div>
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                        <div class="flex gap-2 mt-6">
                            <button
                                class="px-4 py-2 rounded border"
                                on:click=move |_| draft.update(|d| d.back())
                            >
                                "戻る"
                            </button>
                            <button
                                class="px-4 py-2 rounded bg-stone-900 text-white disabled:opacity-50"
                                disabled=move || !can_next()
                                on:click=move |_| {
                                    draft.update(|d| { d.advance(); });
                                }
                            >
                                "確認へ進む"
                            </button>
                        </div>
                    </section>
                </Show>

                // Step 3: 確認/完了
                <Show when=move || step() == WizardStep::Confirm>
                    <section class="mt-6 space-y-4">
                        <Show
                            when=move || done_id().is_some()
                            fallback=move || {
                                view! {
                                    <div class="border rounded p-4 bg-white">
                                        <h3 class="font-semibold">"内容の確認"</h3>
                                        {move || {
                                            let (date, party, course, time) = selected_summary();
                                            view! {
                                                <ul class="mt-2 text-sm text-stone-700 space-y-1">
                                                    <li>"日付：" {date}</li>
                                                    <li>"人数：" {party} " 名"</li>
                                                    <li>"コース：" {course}</li>
                                                    <li>"時間：" {time}</li>
                                                </ul>
                                            }
                                        }}
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            class="px-4 py-2 rounded border"
                                            on:click=move |_| draft.update(|d| d.back())
                                        >
                                            "戻る"
                                        </button>
                                        <button
                                            class="px-4 py-2 rounded bg-stone-900 text-white disabled:opacity-50"
                                            disabled=move || submitting()
                                            on:click=move |_| on_submit()
                                        >
                                            {move || if submitting() { "送信中…" } else { "この内容で予約する" }}
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <div class="p-4 border rounded bg-green-50 text-green-800 space-y-3">
                                <div>
                                    {move || format!(
                                        "予約が完了しました（予約ID: {}）。ダッシュボードから確認できます。",
                                        done_id().unwrap_or_default()
                                    )}
                                </div>
                                <button
                                    class="inline-block px-4 py-2 rounded bg-stone-900 text-white"
                                    on:click={
                                        let navigate = navigate.clone();
                                        move |_| navigate("/dashboard")
                                    }
                                >
                                    "ダッシュボードへ"
                                </button>
                            </div>
                        </Show>
                    </section>
                </Show>
            </div>
        </Show>
    }
}
