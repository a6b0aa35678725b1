use super::cards::EmptyState;
use super::crop_form::{CropFields, CropFormState};
use super::form::show_submit_error;
use super::{ErrorBanner, Spinner, page_model, run};
use crate::auth::{ToastNotifier, use_app};
use crate::web::router::Link;
use krishilink::{AppRoute, ReqwestHttpClient};
use krishilink::pages::{DeleteConfirmation, Loadable, MyPostsPage as Model};
use krishilink_shared::Crop;
use leptos::prelude::*;

type Page = Model<ReqwestHttpClient, ToastNotifier>;

#[component]
pub fn MyPostsPage() -> impl IntoView {
    let app = use_app();
    let crops = RwSignal::new(Loadable::<Vec<Crop>>::Loading);
    let editing = RwSignal::new(None::<String>);
    let form = CropFormState::new();
    let saving = RwSignal::new(false);
    // 确认框：确认时取出，确保一次确认只删一次
    let pending_delete = RwSignal::new(None::<DeleteConfirmation>);

    let (Some(api), Some(user)) = (app.api(), app.user()) else {
        return ().into_any();
    };
    let page = page_model(Model::new(api, app.toasts, &user.email));
    let empty = page.with_value(|p| p.empty_prompt());

    let sync = move |p: &Page| crops.set(p.crops());

    run(page, move |p| async move {
        p.load().await;
        sync(&p);
    });

    let begin_edit = move |id: String| {
        let Some(p) = page.try_get_value() else { return };
        match p.begin_edit(&id) {
            Ok(crop_form) => {
                form.load(crop_form);
                editing.set(Some(id));
            }
            Err(e) => tracing::warn!(error = %e, "cannot edit crop"),
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing.get_untracked() else { return };
        saving.set(true);
        run(page, move |p| async move {
            match p.submit_edit(&id, &form.to_form()).await {
                Ok(()) => {
                    editing.set(None);
                    sync(&p);
                }
                Err(e) => show_submit_error(form.errors, e),
            }
            saving.set(false);
        });
    };

    let request_delete = move |id: String| {
        let Some(p) = page.try_get_value() else { return };
        match p.request_delete(&id) {
            Ok(confirmation) => pending_delete.set(Some(confirmation)),
            Err(e) => tracing::warn!(error = %e, "cannot delete crop"),
        }
    };

    let cancel_delete = move |_| {
        if let (Some(confirmation), Some(p)) =
            (pending_delete.try_update(Option::take).flatten(), page.try_get_value())
        {
            p.cancel_delete(confirmation);
        }
    };

    let confirm_delete = move |_| {
        let Some(confirmation) = pending_delete.try_update(Option::take).flatten() else {
            return;
        };
        run(page, move |p| async move {
            if p.confirm_delete(confirmation).await.is_ok() {
                sync(&p);
            }
        });
    };

    let table = move |list: Vec<Crop>| {
        view! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>"Crop"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Interests"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {list.into_iter().map(|c| {
                            let edit_id = c.id.clone();
                            let delete_id = c.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <Link href=AppRoute::CropDetails(c.id.clone()).to_path() class="font-semibold link">
                                            {c.name.clone()}
                                        </Link>
                                        <p class="text-sm">{c.location.clone()}</p>
                                    </td>
                                    <td>{format!("৳{}/{}", c.price_per_unit, c.unit.label())}</td>
                                    <td>{format!("{} {}", c.quantity, c.unit.label())}</td>
                                    <td>{c.interests.len()}</td>
                                    <td class="flex gap-2">
                                        <button class="btn btn-info btn-xs" on:click=move |_| begin_edit(edit_id.clone())>
                                            "Edit"
                                        </button>
                                        <button class="btn btn-error btn-xs" on:click=move |_| request_delete(delete_id.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    view! {
        <div class="mb-8 flex justify-between items-end">
            <h1 class="text-4xl font-bold">"My Posts"</h1>
            <Link href=AppRoute::AddCrop.to_path() class="btn btn-primary">"Add Crop"</Link>
        </div>

        {move || match crops.get() {
            Loadable::Loading => view! { <Spinner /> }.into_any(),
            Loadable::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
            Loadable::Empty => view! { <EmptyState prompt=empty.clone() /> }.into_any(),
            Loadable::Ready(list) => table(list).into_any(),
        }}

        <Show when=move || editing.get().is_some()>
            <div class="modal modal-open">
                <form class="modal-box max-w-3xl" on:submit=on_save>
                    <h3 class="font-bold text-lg mb-4">"Edit Crop"</h3>
                    <CropFields state=form />
                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>

        {move || pending_delete.with(|pending| pending.as_ref().map(DeleteConfirmation::prompt)).map(|prompt| view! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Confirm Delete"</h3>
                    <p class="py-4">{prompt}</p>
                    <div class="modal-action">
                        <button class="btn" on:click=cancel_delete>"Cancel"</button>
                        <button class="btn btn-error" on:click=confirm_delete>"Delete"</button>
                    </div>
                </div>
            </div>
        })}
    }
    .into_any()
}
