//! KrishiLink 前端应用
//!
//! 架构与核心库分层：
//! - `krishilink`: 领域模型、API 客户端、认证与页面视图模型（与浏览器无关，可测试）
//! - `web`: 浏览器 API 封装与路由服务
//! - `auth`: 把核心服务放进 Leptos 上下文
//! - `components`: UI 组件层

mod auth;
mod components;
pub(crate) mod web;

use crate::auth::{load_config, provide_app};
use crate::components::ErrorBanner;
use crate::components::add_crop::AddCropPage;
use crate::components::all_crops::AllCropsPage;
use crate::components::crop_details::CropDetailsPage;
use crate::components::home::HomePage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::my_interests::MyInterestsPage;
use crate::components::my_posts::MyPostsPage;
use crate::components::not_found::NotFoundPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;

use krishilink::AppRoute;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

pub use web::init_logging;

/// 路由匹配函数
///
/// 守卫已经放行，这里只负责把路由映射到页面组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::AllCrops => view! { <AllCropsPage /> }.into_any(),
        AppRoute::CropDetails(id) => view! { <CropDetailsPage id=id /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::AddCrop => view! { <AddCropPage /> }.into_any(),
        AppRoute::MyPosts => view! { <MyPostsPage /> }.into_any(),
        AppRoute::MyInterests => view! { <MyInterestsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建期配置
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return view! { <ErrorBanner message=e.to_string() /> }.into_any();
        }
    };

    // 2. 创建服务并开始恢复会话
    let ctx = provide_app(config);

    // 3. 认证阶段信号注入路由服务
    view! {
        <Router phase=ctx.phase_signal()>
            <Layout>
                <RouterOutlet matcher=route_matcher />
            </Layout>
        </Router>
    }
    .into_any()
}
