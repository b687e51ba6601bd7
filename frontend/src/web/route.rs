//! ルート定義 - 領域モデル
//!
//! DOM にも web_sys にも依存しない純粋な層。
//! アプリの全ルートとガード属性をここで定義する。

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Menu,
    About,
    Gallery,
    News,
    Events,
    Access,
    Contact,
    Login,
    Signup,
    /// 予約一覧（要ログイン）
    Dashboard,
    /// 予約ウィザード（要ログイン）
    Reserve,
    NotFound,
}

impl AppRoute {
    /// URL path をルートへ解決する。クエリ文字列は含まない
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/menu" => Self::Menu,
            "/about" => Self::About,
            "/gallery" => Self::Gallery,
            "/news" => Self::News,
            "/events" => Self::Events,
            "/access" => Self::Access,
            "/contact" => Self::Contact,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            "/reserve" => Self::Reserve,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::About => "/about",
            Self::Gallery => "/gallery",
            Self::News => "/news",
            Self::Events => "/events",
            Self::Access => "/access",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Reserve => "/reserve",
            Self::NotFound => "/404",
        }
    }

    /// ガード：ログインが必要なルート
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Reserve)
    }

    /// ログイン済みユーザが留まる意味のないルート（ログイン/登録フォーム）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
