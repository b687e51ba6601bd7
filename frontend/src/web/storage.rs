//! LocalStorage の薄いラッパ
//!
//! ログインフォームのメールアドレス自動補完にだけ使う。
//! パスワードは保存しない。失敗（プライベートモード等）は黙って無視する。

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.set_item(key, value);
        }
    }
}
