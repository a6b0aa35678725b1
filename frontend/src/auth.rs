//! 认证与服务上下文
//!
//! 核心的 `AuthContext` 与 API 客户端都不是 `Send`，放在 `StoredValue::new_local` 里；
//! 组件只接触可复制的 `AppContext` 句柄和其中的信号。
//! 认证阶段通过 watch 通道转发到 `phase` 信号，路由守卫只读这个信号。

use crate::web::BrowserSessionStore;
use krishilink::config::{
    KEY_API_URL, KEY_API_URL_LEGACY, KEY_FIREBASE_API_KEY, KEY_IDENTITY_URL, KEY_SESSION_KEY,
    KEY_TOKEN_URL,
};
use krishilink::{
    AppConfig, AuthContext, AuthPhase, AuthUser, FirebaseIdentity, KrishiError, KrishiLinkApi,
    KrishiResult, Notice, NoticeLevel, Notifier, ReqwestHttpClient,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

pub type Api = KrishiLinkApi<ReqwestHttpClient>;
pub type CoreAuth = AuthContext<FirebaseIdentity<ReqwestHttpClient>, BrowserSessionStore>;

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// 构建期注入的配置（Trunk 构建时的环境变量）
fn build_time_env(key: &str) -> Option<String> {
    let value = match key {
        KEY_API_URL => option_env!("KRISHILINK_API_URL"),
        KEY_API_URL_LEGACY => option_env!("VITE_API_URL"),
        KEY_FIREBASE_API_KEY => option_env!("KRISHILINK_FIREBASE_API_KEY"),
        KEY_IDENTITY_URL => option_env!("KRISHILINK_IDENTITY_URL"),
        KEY_TOKEN_URL => option_env!("KRISHILINK_TOKEN_URL"),
        KEY_SESSION_KEY => option_env!("KRISHILINK_SESSION_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load_config() -> KrishiResult<AppConfig> {
    AppConfig::from_lookup(build_time_env)
}

pub struct Services {
    pub api: Api,
    pub auth: CoreAuth,
}

/// 全局提示队列，写入后定时自动消失
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub notices: RwSignal<Vec<Notice>>,
}

impl ToastNotifier {
    pub fn dismiss(&self, id: Uuid) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        if notice.level != NoticeLevel::Success {
            tracing::warn!(message = %notice.message, level = ?notice.level, "toast");
        }
        let id = notice.id;
        self.notices.update(|list| list.push(notice));
        let this = *self;
        set_timeout(move || this.dismiss(id), NOTICE_TTL);
    }
}

/// 应用上下文句柄
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Rc<Services>, LocalStorage>,
    pub phase: RwSignal<AuthPhase>,
    pub toasts: ToastNotifier,
}

impl AppContext {
    pub fn services(&self) -> Option<Rc<Services>> {
        self.services.try_get_value()
    }

    pub fn api(&self) -> Option<Api> {
        self.services().map(|s| s.api.clone())
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.phase.get_untracked().user().cloned()
    }

    /// 认证状态信号（注入路由服务）
    pub fn phase_signal(&self) -> Signal<AuthPhase> {
        self.phase.into()
    }

    pub fn sign_out(&self) {
        if let Some(services) = self.services() {
            services.auth.sign_out();
        }
    }
}

/// 组件卸载后的迟到响应直接丢弃
pub fn gone() -> KrishiError {
    KrishiError::config("application context is gone")
}

/// 创建服务、提供上下文，并开始首次会话恢复
pub fn provide_app(config: AppConfig) -> AppContext {
    let client = ReqwestHttpClient::new();
    let services = Rc::new(Services {
        api: KrishiLinkApi::new(&config.api_url, client.clone()),
        auth: AuthContext::new(
            FirebaseIdentity::new(config.identity, client),
            BrowserSessionStore::new(&config.session_key),
        ),
    });

    let ctx = AppContext {
        services: StoredValue::new_local(services.clone()),
        phase: RwSignal::new(AuthPhase::Unresolved),
        toasts: ToastNotifier {
            notices: RwSignal::new(Vec::new()),
        },
    };
    provide_context(ctx);

    // 先订阅再恢复，保证第一次变化不会丢
    let mut rx = services.auth.subscribe();
    let phase = ctx.phase;
    spawn_local(async move {
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().clone();
            tracing::debug!(resolved = next.is_resolved(), "auth phase changed");
            phase.set(next);
        }
    });

    spawn_local(async move {
        services.auth.resolve().await;
    });

    ctx
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
