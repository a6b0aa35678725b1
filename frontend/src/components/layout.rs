//! 页面骨架：导航栏、提示队列、页脚

use crate::auth::use_app;
use crate::web::router::{Link, use_router};
use krishilink::{AppRoute, AuthPhase, NoticeLevel};
use leptos::prelude::*;

#[component]
fn NavLinks() -> impl IntoView {
    let app = use_app();
    let signed_in = move || matches!(app.phase.get(), AuthPhase::Authenticated(_));

    view! {
        <li><Link href=AppRoute::Home.to_path()>"Home"</Link></li>
        <li><Link href=AppRoute::AllCrops.to_path()>"All Crops"</Link></li>
        <Show when=signed_in>
            <li><Link href=AppRoute::Profile.to_path()>"Profile"</Link></li>
            <li><Link href=AppRoute::AddCrop.to_path()>"Add Crop"</Link></li>
            <li><Link href=AppRoute::MyPosts.to_path()>"My Posts"</Link></li>
            <li><Link href=AppRoute::MyInterests.to_path()>"My Interests"</Link></li>
        </Show>
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let app = use_app();
    let router = use_router();

    let sign_out = move |_| {
        app.sign_out();
        router.navigate_to(AppRoute::Home);
    };

    move || match app.phase.get() {
        AuthPhase::Unresolved => view! { <span class="loading loading-dots loading-sm"></span> }.into_any(),
        AuthPhase::Authenticated(user) => view! {
            <div class="flex items-center gap-3">
                <span class="hidden md:inline text-sm font-semibold">{user.name().to_string()}</span>
                <button class="btn btn-outline btn-sm" on:click=sign_out>"Logout"</button>
            </div>
        }
        .into_any(),
        AuthPhase::Unauthenticated => view! {
            <div class="flex gap-2">
                <Link href=AppRoute::Login.to_path() class="btn btn-primary btn-sm">"Login"</Link>
                <Link href=AppRoute::Register.to_path() class="btn btn-outline btn-sm">"Register"</Link>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Toasts() -> impl IntoView {
    let toasts = use_app().toasts;

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.level {
                        NoticeLevel::Success => "alert alert-success",
                        NoticeLevel::Warning => "alert alert-warning",
                        NoticeLevel::Error => "alert alert-error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <span>{notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <nav class="navbar bg-base-100 shadow-sm px-4">
                <div class="navbar-start">
                    <Link href=AppRoute::Home.to_path() class="btn btn-ghost text-xl text-primary">
                        "KrishiLink"
                    </Link>
                </div>
                <div class="navbar-center hidden lg:flex">
                    <ul class="menu menu-horizontal px-1">
                        <NavLinks />
                    </ul>
                </div>
                <div class="navbar-end">
                    <UserMenu />
                </div>
            </nav>
            <Toasts />
            <main class="flex-1 container mx-auto px-4 py-8">{children()}</main>
            <footer class="footer footer-center p-6 bg-base-300 text-base-content">
                <p>"KrishiLink: connecting farmers and buyers"</p>
            </footer>
        </div>
    }
}
