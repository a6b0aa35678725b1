use super::cards::CropGrid;
use super::{page_model, run};
use crate::auth::use_app;
use crate::web::router::Link;
use krishilink::AppRoute;
use krishilink::pages::{self, CropCard, EmptyPrompt, Loadable};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let latest = RwSignal::new(Loadable::<Vec<CropCard>>::Loading);

    if let Some(api) = app.api() {
        let page = page_model(pages::HomePage::new(api));
        run(page, move |p| async move {
            p.load().await;
            latest.set(p.latest());
        });
    }

    let empty = Signal::derive(|| EmptyPrompt {
        title: "No crops listed yet".into(),
        hint: "Fresh listings from farmers will show up here",
        action_label: "Add Crop",
        action: AppRoute::AddCrop,
    });

    view! {
        <section class="hero bg-base-200 rounded-box py-16 mb-10">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">"KrishiLink"</h1>
                    <p class="py-6">"Connecting farmers and buyers directly. List your harvest, find fresh produce."</p>
                    <Link href="/all-crops".to_string() class="btn btn-primary">"Browse Crops"</Link>
                </div>
            </div>
        </section>
        <section>
            <h2 class="text-3xl font-bold mb-6">"Latest Crops"</h2>
            <CropGrid cards=latest empty=empty />
        </section>
    }
}
