use super::cards::EmptyState;
use super::crop_details::status_badge;
use super::{ErrorBanner, Spinner, page_model, run};
use crate::auth::use_app;
use crate::web::router::Link;
use krishilink::listing::InterestSort;
use krishilink::pages::{InterestRow, Loadable, MyInterestsPage as Model};
use leptos::prelude::*;

#[component]
pub fn MyInterestsPage() -> impl IntoView {
    let app = use_app();
    let rows = RwSignal::new(Loadable::<Vec<InterestRow>>::Loading);
    let sort = RwSignal::new(InterestSort::default());

    let Some((api, user)) = app.api().zip(app.user()) else {
        return ().into_any();
    };
    let page = page_model(Model::new(api, &user.email));
    let empty = page.with_value(|p| p.empty_prompt());

    run(page, move |p| async move {
        p.load().await;
        rows.set(p.rows());
    });

    // 排序只作用于已取回的列表
    Effect::new(move |_| {
        let by = sort.get();
        if let Some(p) = page.try_get_value() {
            p.set_sort(by);
            rows.set(p.rows());
        }
    });

    let table = |list: Vec<InterestRow>| {
        view! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>"Crop"</th>
                            <th>"Owner"</th>
                            <th>"Quantity"</th>
                            <th>"Message"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {list.into_iter().map(|row| view! {
                            <tr>
                                <td>
                                    <Link href=row.crop_href class="font-semibold link">{row.crop_name}</Link>
                                </td>
                                <td>
                                    <p>{row.owner_name}</p>
                                    <p class="text-sm">{row.owner_email}</p>
                                </td>
                                <td>{row.quantity}</td>
                                <td>{row.message.unwrap_or_else(|| "No message".to_string())}</td>
                                <td>{status_badge(row.status)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    view! {
        <div class="mb-8 flex flex-col md:flex-row md:items-end md:justify-between gap-4">
            <h1 class="text-4xl font-bold">"My Interests"</h1>
            <label class="form-control w-full max-w-xs">
                <span class="label-text">"Sort by"</span>
                <select
                    class="select select-bordered"
                    prop:value=move || sort.get().label()
                    on:change=move |ev| {
                        if let Some(by) = InterestSort::from_label(&event_target_value(&ev)) {
                            sort.set(by);
                        }
                    }
                >
                    {InterestSort::ALL
                        .iter()
                        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>

        {move || match rows.get() {
            Loadable::Loading => view! { <Spinner /> }.into_any(),
            Loadable::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
            Loadable::Empty => view! { <EmptyState prompt=empty.clone() /> }.into_any(),
            Loadable::Ready(list) => table(list).into_any(),
        }}
    }
    .into_any()
}
