use super::cards::CropGrid;
use super::{page_model, run};
use crate::auth::use_app;
use krishilink::ReqwestHttpClient;
use krishilink::pages::{self, CropCard, EmptyPrompt, Loadable};
use leptos::prelude::*;

#[component]
pub fn AllCropsPage() -> impl IntoView {
    let app = use_app();
    let cards = RwSignal::new(Loadable::<Vec<CropCard>>::Loading);
    let empty = RwSignal::new(None::<EmptyPrompt>);
    let query = RwSignal::new(String::new());

    let Some(api) = app.api() else {
        return ().into_any();
    };
    let page = page_model(pages::AllCropsPage::new(api));

    let refresh_view = move |p: &pages::AllCropsPage<ReqwestHttpClient>| {
        cards.set(p.cards());
        empty.set(Some(p.empty_prompt()));
    };

    run(page, move |p| async move {
        p.load().await;
        refresh_view(&*p);
    });

    // 搜索只在已取回的快照上过滤，不重新请求
    Effect::new(move |_| {
        let q = query.get();
        if let Some(p) = page.try_get_value() {
            p.set_query(&q);
            refresh_view(&*p);
        }
    });

    let empty_prompt = Signal::derive(move || {
        empty.get().unwrap_or_else(|| EmptyPrompt {
            title: "No crops available yet".into(),
            hint: "",
            action_label: "Add Crop",
            action: krishilink::AppRoute::AddCrop,
        })
    });

    view! {
        <div class="mb-8 flex flex-col md:flex-row md:items-end md:justify-between gap-4">
            <div>
                <h1 class="text-4xl font-bold mb-2">"All Crops"</h1>
                <p class="text-base-content/70">"Fresh produce straight from the farm"</p>
            </div>
            <input
                type="search"
                placeholder="Search crops by name..."
                class="input input-bordered w-full max-w-xs"
                prop:value=query
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
        <CropGrid cards=cards empty=empty_prompt />
    }
    .into_any()
}
