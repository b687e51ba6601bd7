//! ルータサービス - History API の薄い封じ込め
//!
//! window.history への操作はすべてこのモジュールに集約する。
//! 認証そのものは知らず、注入されたセッション信号だけでガードする。
//! 初回プローブ中（Probing）はリダイレクトしない：
//! 保護ページ側が待機表示を出し、プローブ完了後の信号変化で
//! 自動リダイレクトが効く。ログイン画面が一瞬光るのを防ぐため。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::auth::SessionStatus;

/// 現在のブラウザ path（クエリを除く）
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 現在のクエリ文字列（"?a=b" 形式、無ければ空）
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// クエリ文字列からひとつのパラメータを取り出す
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let params = web_sys::UrlSearchParams::new_with_str(search.trim_start_matches('?')).ok()?;
    params.get(key).filter(|v| !v.is_empty())
}

fn push_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

fn replace_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 注入されたセッション状態（疎結合のための信号）
    session: Signal<SessionStatus>,
}

impl RouterService {
    fn new(session: Signal<SessionStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);
        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 導線の入口。"/reserve?course_id=..." のようにクエリ付きでもよい
    pub fn navigate(&self, to: &str) {
        let path = to.split('?').next().unwrap_or(to);
        let target = AppRoute::from_path(path);
        self.apply(target, to, true);
    }

    fn apply(&self, target: AppRoute, url: &str, use_push: bool) {
        let status = self.session.get_untracked();

        // ガード1：未ログイン確定なら保護ルートへは入れない。
        // Probing は素通しし、ページ側の待機表示に任せる
        if target.requires_auth() && status == SessionStatus::Guest {
            web_sys::console::log_1(&"[Router] 未ログインのためログインへ誘導".into());
            let redirect = AppRoute::auth_failure_redirect();
            if use_push {
                push_history_state(redirect.to_path());
            } else {
                replace_history_state(redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // ガード2：ログイン済みでログイン/登録フォームに来たら一覧へ
        if target.should_redirect_when_authenticated() && status == SessionStatus::SignedIn {
            web_sys::console::log_1(&"[Router] ログイン済みのためダッシュボードへ".into());
            let redirect = AppRoute::auth_success_redirect();
            if use_push {
                push_history_state(redirect.to_path());
            } else {
                replace_history_state(redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        if use_push {
            push_history_state(url);
        } else {
            replace_history_state(url);
        }
        self.set_route.set(target);
    }

    /// 戻る/進むボタンの監視。popstate でもガードを通す
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            if target.requires_auth() && session.get_untracked() == SessionStatus::Guest {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // リスナーを生かし続けるため意図的にリーク
        closure.forget();
    }

    /// セッション状態の変化に追随する自動リダイレクト
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let status = session.get();
            let route = current_route.get_untracked();

            match status {
                SessionStatus::Guest => {
                    // ログアウト直後、または初回プローブで未ログインと判明
                    if route.requires_auth() {
                        let redirect = AppRoute::auth_failure_redirect();
                        replace_history_state(redirect.to_path());
                        set_route.set(redirect);
                        web_sys::console::log_1(
                            &"[Router] セッション終了。ログインへ移動".into(),
                        );
                    }
                }
                SessionStatus::SignedIn => {
                    if route.should_redirect_when_authenticated() {
                        let redirect = AppRoute::auth_success_redirect();
                        push_history_state(redirect.to_path());
                        set_route.set(redirect);
                    }
                }
                SessionStatus::Probing => {}
            }
        });
    }
}

fn provide_router(session: Signal<SessionStatus>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_session_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 画面遷移クロージャ
pub fn use_navigate() -> impl Fn(&str) + Clone + Copy {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI コンポーネント
// ============================================================================

/// ルータ根コンポーネント。App の最上位で使う
#[component]
pub fn Router(
    /// セッション状態信号
    session: Signal<SessionStatus>,
    /// 子要素
    children: Children,
) -> impl IntoView {
    provide_router(session);
    children()
}

/// 現在のルートに応じたビューを描画する出口
#[component]
pub fn RouterOutlet(
    /// ルート → ビューの対応関数
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
