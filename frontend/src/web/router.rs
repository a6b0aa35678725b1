//! 路由服务模块 - 核心引擎
//!
//! 封装 History API。导航流程为"监听 -> 守卫 -> 处理 -> 加载"，
//! 守卫决策本身来自 `krishilink::guard`，这里只负责执行。

use krishilink::{AppRoute, AuthPhase, GuardDecision, guard};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向用 replace，避免后退键回到被拦截的页面
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 认证阶段以信号形式注入，与认证实现解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    phase: Signal<AuthPhase>,
    /// 被守卫拦下的路径，登录后回到这里
    return_to: RwSignal<Option<String>>,
}

impl RouterService {
    fn new(phase: Signal<AuthPhase>) -> Self {
        Self {
            current_route: RwSignal::new(AppRoute::from_path(&current_path())),
            phase,
            return_to: RwSignal::new(None),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    /// 当前路由在当前认证阶段下的守卫结论
    pub fn decision(&self) -> GuardDecision {
        guard(&self.current_route.get(), &self.phase.get())
    }

    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        push_history_state(&target.to_path());
        self.current_route.set(target);
    }

    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate(&route.to_path());
    }

    fn init_popstate_listener(&self) {
        let current_route = self.current_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            current_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或认证阶段变化时重新守卫；决策为重定向时在这里执行。
    fn setup_guard(&self) {
        let router = *self;

        Effect::new(move |_| {
            let route = router.current_route.get();
            let phase = router.phase.get();

            let GuardDecision::Redirect { to, from } = guard(&route, &phase) else {
                return;
            };

            let target = match (to, from) {
                (AppRoute::Login, Some(from)) => {
                    tracing::info!(%from, "login required");
                    router.return_to.set(Some(from));
                    AppRoute::Login
                }
                (AppRoute::Home, _) => {
                    let back = router.return_to.try_update(Option::take).flatten();
                    AppRoute::after_login(back.as_deref())
                }
                (to, _) => to,
            };

            replace_history_state(&target.to_path());
            router.current_route.set(target);
        });
    }
}

fn provide_router(phase: Signal<AuthPhase>) -> RouterService {
    let router = RouterService::new(phase);
    router.init_popstate_listener();
    router.setup_guard();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

#[component]
pub fn Router(phase: Signal<AuthPhase>, children: Children) -> impl IntoView {
    provide_router(phase);
    children()
}

/// 路由出口
///
/// 会话未恢复前只显示加载状态，不做任何重定向。
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || match router.decision() {
        GuardDecision::Render => matcher(router.current_route().get()),
        GuardDecision::Wait | GuardDecision::Redirect { .. } => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接：拦截点击走 History API
#[component]
pub fn Link(href: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let router = use_router();
    let target = href.clone();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
