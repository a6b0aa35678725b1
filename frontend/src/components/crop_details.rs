use super::form::{TextArea, TextField, show_submit_error};
use super::{ErrorBanner, Spinner, page_model, run};
use crate::auth::{ToastNotifier, use_app};
use crate::web::router::Link;
use krishilink::lifecycle::Decision;
use krishilink::pages::{CropDetailsPage as Model, Loadable};
use krishilink::validation::InterestForm;
use krishilink::{FormErrors, ReqwestHttpClient};
use krishilink_shared::{Crop, Interest, InterestStatus};
use leptos::prelude::*;

type Page = Model<ReqwestHttpClient, ToastNotifier>;

pub(super) fn status_badge(status: InterestStatus) -> impl IntoView {
    let class = match status {
        InterestStatus::Pending => "badge badge-warning",
        InterestStatus::Accepted => "badge badge-success",
        InterestStatus::Rejected => "badge badge-error",
    };
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn CropDetailsPage(id: String) -> impl IntoView {
    let app = use_app();
    let crop = RwSignal::new(Loadable::<Crop>::Loading);
    let is_owner = RwSignal::new(false);
    let received = RwSignal::new(Vec::<Interest>::new());
    let mine = RwSignal::new(None::<Interest>);

    let quantity = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let submitting = RwSignal::new(false);

    let Some(api) = app.api() else {
        return ().into_any();
    };
    let page = page_model(Model::new(api, app.toasts, &id, app.user()));

    let sync = move |p: &Page| {
        crop.set(p.crop());
        is_owner.set(p.is_owner());
        received.set(p.received_interests());
        mine.set(p.my_interest());
    };

    run(page, move |p| async move {
        p.load().await;
        sync(&p);
    });

    let total = move || {
        let form = InterestForm {
            quantity: quantity.get(),
            message: String::new(),
        };
        page.try_get_value()
            .map(|p| p.estimated_total(&form))
            .unwrap_or(0.0)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitting.set(true);
        run(page, move |p| async move {
            let form = InterestForm {
                quantity: quantity.get_untracked(),
                message: message.get_untracked(),
            };
            match p.submit_interest(&form).await {
                Ok(()) => {
                    errors.set(FormErrors::new());
                    quantity.set(String::new());
                    message.set(String::new());
                    sync(&p);
                }
                Err(e) => show_submit_error(errors, e),
            }
            submitting.set(false);
        });
    };

    let respond = move |interest_id: String, decision: Decision| {
        run(page, move |p| async move {
            if p.respond(&interest_id, decision).await.is_ok() {
                sync(&p);
            }
        });
    };

    let owner_panel = move || {
        view! {
            <div class="card bg-base-100 shadow-xl mt-8">
                <div class="card-body">
                    <h2 class="card-title">"Received Interests"</h2>
                    <Show
                        when=move || !received.get().is_empty()
                        fallback=|| view! { <p class="text-base-content/60">"No interests received yet"</p> }
                    >
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>"Buyer"</th>
                                    <th>"Quantity"</th>
                                    <th>"Message"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || received.get().into_iter().map(|i| {
                                    let accept_id = i.id.clone();
                                    let reject_id = i.id.clone();
                                    let pending = !i.status.is_terminal();
                                    view! {
                                        <tr>
                                            <td>
                                                <p class="font-semibold">{i.user_name.clone()}</p>
                                                <p class="text-sm">{i.user_email.clone()}</p>
                                            </td>
                                            <td>{i.quantity}</td>
                                            <td>{i.message().unwrap_or("No message").to_string()}</td>
                                            <td>{status_badge(i.status)}</td>
                                            <td class="flex gap-2">
                                                <button
                                                    class="btn btn-success btn-xs"
                                                    disabled=!pending
                                                    on:click=move |_| respond(accept_id.clone(), Decision::Accept)
                                                >"Accept"</button>
                                                <button
                                                    class="btn btn-error btn-xs"
                                                    disabled=!pending
                                                    on:click=move |_| respond(reject_id.clone(), Decision::Reject)
                                                >"Reject"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>
        }
    };

    let buyer_panel = move || match (app.user(), mine.get()) {
        (None, _) => view! {
            <div class="alert mt-8">
                <span>"Log in to express interest in this crop."</span>
                <Link href="/login".to_string() class="btn btn-primary btn-sm">"Login"</Link>
            </div>
        }
        .into_any(),
        (Some(_), Some(sent)) => view! {
            <div class="alert alert-info mt-8">
                <span>"You've already sent an interest for this crop: "</span>
                {status_badge(sent.status)}
            </div>
        }
        .into_any(),
        (Some(_), None) => view! {
            <form class="card bg-base-100 shadow-xl mt-8" on:submit=on_submit>
                <div class="card-body">
                    <h2 class="card-title">"Express Interest"</h2>
                    <TextField label="Quantity" field="quantity" value=quantity errors=errors kind="number" />
                    <TextArea label="Message (optional)" field="message" value=message errors=errors />
                    <span class="text-error text-sm">{move || errors.with(|e| e.get("crop").map(str::to_string))}</span>
                    <p class="font-semibold">"Total: ৳" {move || format!("{:.2}", total())}</p>
                    <button class="btn btn-primary" disabled=move || submitting.get()>"Submit Interest"</button>
                </div>
            </form>
        }
        .into_any(),
    };

    (move || match crop.get() {
        Loadable::Loading => view! { <Spinner /> }.into_any(),
        Loadable::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
        Loadable::Empty => view! { <ErrorBanner message="Crop not found".to_string() /> }.into_any(),
        Loadable::Ready(c) => view! {
            <div class="grid lg:grid-cols-2 gap-8">
                <img src=c.image.clone() alt=c.name.clone() class="rounded-box w-full object-cover" />
                <div class="space-y-3">
                    <h1 class="text-4xl font-bold">{c.name.clone()}</h1>
                    <span class="badge badge-success">{c.crop_type.label()}</span>
                    <p class="text-2xl font-bold text-primary">
                        {format!("৳{}/{}", c.price_per_unit, c.unit.label())}
                    </p>
                    <p>"Available: " {c.quantity} " " {c.unit.label()}</p>
                    <p>"Location: " {c.location.clone()}</p>
                    <p class="text-base-content/80">{c.description.clone()}</p>
                    <p class="text-sm">"Listed by " {c.owner.owner_name.clone()} " (" {c.owner.owner_email.clone()} ")"</p>
                </div>
            </div>
            {move || if is_owner.get() { owner_panel().into_any() } else { buyer_panel().into_any() }}
        }
        .into_any(),
    })
    .into_any()
}
