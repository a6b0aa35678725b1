use super::form::{TextField, show_submit_error};
use crate::auth::use_app;
use crate::web::router::Link;
use krishilink::validation::RegisterForm;
use krishilink::{FormErrors, Notifier, SubmitError};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(services) = app.services() else { return };
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            photo_url: photo_url.get_untracked(),
            password: password.get_untracked(),
        };
        submitting.set(true);
        spawn_local(async move {
            match services.auth.register(&services.api, &form).await {
                Ok(_) => app.toasts.success("Registration successful!"),
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
                    <h1 class="text-3xl font-bold text-center">"Register"</h1>
                    <TextField label="Name" field="name" value=name errors=errors />
                    <TextField label="Email" field="email" value=email errors=errors kind="email" />
                    <TextField label="Photo URL" field="photo_url" value=photo_url errors=errors kind="url" placeholder="Optional" />
                    <TextField label="Password" field="password" value=password errors=errors kind="password" />
                    <button class="btn btn-primary mt-4" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Register" }}
                    </button>
                    <p class="text-center text-sm mt-2">
                        "Already have an account? "
                        <Link href="/login".to_string() class="link link-primary">"Login"</Link>
                    </p>
                </div>
            </form>
        </div>
    }
}
