use super::form::{TextField, show_submit_error};
use crate::auth::use_app;
use crate::web::router::Link;
use krishilink::validation::LoginForm;
use krishilink::{FormErrors, Notifier, SubmitError};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录成功后不在这里跳转：认证阶段变化会触发路由守卫，由守卫回到原页面。
#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(services) = app.services() else { return };
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        submitting.set(true);
        spawn_local(async move {
            match services.auth.sign_in(&form).await {
                Ok(user) => app.toasts.success(format!("Welcome back, {}!", user.name())),
                Err(SubmitError::Request(e)) => {
                    app.toasts.error(e.message());
                    errors.set(FormErrors::new());
                }
                Err(invalid) => show_submit_error(errors, invalid),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="flex justify-center">
            <form class="card bg-base-100 w-full max-w-md shadow-2xl" on:submit=on_submit>
                <div class="card-body">
                    <h1 class="text-3xl font-bold text-center">"Login"</h1>
                    <TextField label="Email" field="email" value=email errors=errors kind="email" />
                    <TextField label="Password" field="password" value=password errors=errors kind="password" />
                    <button class="btn btn-primary mt-4" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <p class="text-center text-sm mt-2">
                        "Don't have an account? "
                        <Link href="/register".to_string() class="link link-primary">"Register"</Link>
                    </p>
                </div>
            </form>
        </div>
    }
}
