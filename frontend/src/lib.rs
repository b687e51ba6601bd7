//! ビストロ・サヴール フロントエンド
//!
//! Context 駆動の構成：
//! - `web::route` / `web::router`: ルート定義とルータサービス
//! - `auth`: セッション状態管理（ルータには信号だけを注入）
//! - `api`: サーバ API への薄いクライアント
//! - `components`: ページとウィジェット

mod api;
mod auth;
mod components {
    pub mod about;
    pub mod access;
    pub mod contact;
    pub mod dashboard;
    pub mod events;
    pub mod footer;
    pub mod gallery;
    pub mod home;
    pub mod login;
    pub mod menu;
    mod modal;
    pub mod navbar;
    pub mod news;
    pub mod reserve;
    pub mod signup;

    pub(crate) use modal::Modal;
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::SessionContext;
use crate::components::about::AboutPage;
use crate::components::access::AccessPage;
use crate::components::contact::ContactPage;
use crate::components::dashboard::DashboardPage;
use crate::components::events::EventsPage;
use crate::components::footer::Footer;
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::menu::MenuPage;
use crate::components::navbar::Navbar;
use crate::components::news::NewsPage;
use crate::components::reserve::ReservePage;
use crate::components::signup::SignupPage;

// ブラウザネイティブ API の封じ込め
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// ルート → ビューの対応
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Menu => view! { <MenuPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Gallery => view! { <GalleryPage /> }.into_any(),
        AppRoute::News => view! { <NewsPage /> }.into_any(),
        AppRoute::Events => view! { <EventsPage /> }.into_any(),
        AppRoute::Access => view! { <AccessPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Reserve => view! { <ReservePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-stone-300">"404"</h1>
                    <p class="text-xl mt-4 text-stone-600">"ページが見つかりません"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. セッションコンテキストを作って共有
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 2. マウント時に一度だけセッションを確認
    spawn_local(async move {
        auth::refresh(&session_ctx).await;
    });

    // 3. ルータにはセッション状態の信号だけを渡す（疎結合）
    let session = session_ctx.status_signal();

    view! {
        <Router session=session>
            <div class="min-h-screen flex flex-col bg-stone-50 text-stone-900">
                <Navbar />
                <main class="flex-1 w-full max-w-5xl mx-auto px-4 py-8">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
