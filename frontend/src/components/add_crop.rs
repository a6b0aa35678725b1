use super::crop_form::{CropFields, CropFormState};
use super::form::show_submit_error;
use super::{page_model, run};
use crate::auth::use_app;
use crate::web::router::use_router;
use krishilink::pages::AddCropPage as Model;
use leptos::prelude::*;

#[component]
pub fn AddCropPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let state = CropFormState::new();
    let submitting = RwSignal::new(false);

    // 守卫保证这里一定已登录
    let (Some(api), Some(user)) = (app.api(), app.user()) else {
        return ().into_any();
    };
    let page = page_model(Model::new(api, app.toasts, &user));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitting.set(true);
        run(page, move |p| async move {
            match p.submit(&state.to_form()).await {
                Ok(next) => {
                    state.reset();
                    router.navigate_to(next);
                }
                Err(e) => show_submit_error(state.errors, e),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-4xl font-bold mb-6">"Add New Crop"</h1>
            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-2">
                    <CropFields state=state />
                    <button class="btn btn-primary mt-4" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Adding..." } else { "Add Crop" }}
                    </button>
                </div>
            </form>
        </div>
    }
    .into_any()
}
