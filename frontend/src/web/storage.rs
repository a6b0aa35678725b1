//! 会话持久化
//!
//! 刷新令牌存在 LocalStorage 中，页面刷新后由 `AuthContext::resolve` 取回。

use krishilink::SessionStore;

pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    /// 隐私模式等情况下 LocalStorage 可能不可用
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        Self::local_storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn save(&self, refresh_token: &str) {
        let saved = Self::local_storage().is_some_and(|s| s.set_item(&self.key, refresh_token).is_ok());
        if !saved {
            tracing::warn!(key = %self.key, "could not persist session; it will not survive a reload");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::local_storage() {
            if storage.remove_item(&self.key).is_err() {
                tracing::warn!(key = %self.key, "could not clear stored session");
            }
        }
    }
}
