//! UI 组件层
//!
//! 组件只做渲染：数据加载与提交都交给 `krishilink::pages` 中的视图模型，
//! 视图模型放在 `StoredValue::new_local` 中，结果再拷进信号驱动界面。

pub mod add_crop;
pub mod all_crops;
pub mod crop_details;
mod cards;
mod crop_form;
mod form;
pub mod home;
pub mod layout;
pub mod login;
pub mod my_interests;
pub mod my_posts;
pub mod not_found;
pub mod profile;
pub mod register;

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

pub type PageModel<P> = StoredValue<Rc<P>, LocalStorage>;

pub fn page_model<P: 'static>(page: P) -> PageModel<P> {
    StoredValue::new_local(Rc::new(page))
}

/// 在后台运行一次页面动作；组件已卸载时什么也不做。
pub fn run<P, F, Fut>(page: PageModel<P>, action: F)
where
    P: 'static,
    F: FnOnce(Rc<P>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    spawn_local(async move {
        if let Some(p) = page.try_get_value() {
            action(p).await;
        }
    });
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error my-6">
            <span>{message}</span>
        </div>
    }
}
