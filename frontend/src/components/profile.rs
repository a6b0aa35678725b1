use super::form::{TextField, show_submit_error};
use super::{ErrorBanner, Spinner, page_model, run};
use crate::auth::use_app;
use krishilink::FormErrors;
use krishilink::pages::{Loadable, ProfilePage as Model, ProfileView};
use krishilink::validation::ProfileForm;
use leptos::prelude::*;

fn count(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = use_app();
    let profile = RwSignal::new(Loadable::<ProfileView>::Loading);
    let editing = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let saving = RwSignal::new(false);

    let (Some(api), Some(user)) = (app.api(), app.user()) else {
        return ().into_any();
    };
    let page = page_model(Model::new(api, app.toasts, user));

    run(page, move |p| async move {
        p.load().await;
        profile.set(p.view());
    });

    let open_editor = move |_| {
        if let Some(p) = page.try_get_value() {
            let form = p.edit_form();
            name.set(form.name);
            photo_url.set(form.photo_url);
            errors.set(FormErrors::new());
            editing.set(true);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(services) = app.services() else { return };
        saving.set(true);
        run(page, move |p| async move {
            let form = ProfileForm {
                name: name.get_untracked(),
                photo_url: photo_url.get_untracked(),
            };
            match p.save(&services.auth, &form).await {
                Ok(()) => {
                    editing.set(false);
                    profile.set(p.view());
                }
                Err(e) => show_submit_error(errors, e),
            }
            saving.set(false);
        });
    };

    let card = move |v: ProfileView| {
        let avatar = v
            .photo_url()
            .map(str::to_string)
            .unwrap_or_else(|| "https://i.ibb.co/4pDNDk1/avatar.png".to_string());
        let joined = v
            .user
            .created_at
            .map(|t| t.format("%B %d, %Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body items-center text-center">
                    <div class="avatar">
                        <div class="w-28 rounded-full ring ring-primary ring-offset-2">
                            <img src=avatar alt=v.display_name().to_string() />
                        </div>
                    </div>
                    <h2 class="card-title text-2xl">{v.display_name().to_string()}</h2>
                    <p class="text-base-content/70">{v.user.email.clone()}</p>
                    <div class="stats shadow mt-4">
                        <div class="stat">
                            <div class="stat-title">"Crops Posted"</div>
                            <div class="stat-value text-primary">{count(v.crops_posted)}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Interests Sent"</div>
                            <div class="stat-value text-secondary">{count(v.interests_sent)}</div>
                        </div>
                    </div>
                    <p class="text-sm mt-2">"Member since " {joined}</p>
                    <button class="btn btn-primary mt-4" on:click=open_editor>"Edit Profile"</button>
                </div>
            </div>
        }
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-4xl font-bold mb-6">"My Profile"</h1>
            {move || match profile.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
                Loadable::Empty => ().into_any(),
                Loadable::Ready(v) => card(v).into_any(),
            }}

            <Show when=move || editing.get()>
                <div class="modal modal-open">
                    <form class="modal-box" on:submit=on_save>
                        <h3 class="font-bold text-lg mb-4">"Edit Profile"</h3>
                        <TextField label="Name" field="name" value=name errors=errors />
                        <TextField label="Photo URL" field="photo_url" value=photo_url errors=errors kind="url" />
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=move |_| editing.set(false)>"Cancel"</button>
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
