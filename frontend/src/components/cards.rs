use super::{ErrorBanner, Spinner};
use crate::web::router::Link;
use krishilink::pages::{CropCard, EmptyPrompt, Loadable};
use leptos::prelude::*;

#[component]
pub fn CropCardView(card: CropCard) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure class="h-48 overflow-hidden">
                <img src=card.image alt=card.name.clone() class="w-full object-cover" />
            </figure>
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <h2 class="card-title">{card.name.clone()}</h2>
                    <span class="badge badge-success">{card.crop_type}</span>
                </div>
                <p class="text-lg font-bold text-primary">{card.price}</p>
                <p class="text-sm text-base-content/70">{card.location}</p>
                <div class="card-actions justify-end">
                    <Link href=card.href class="btn btn-primary btn-sm">"View Details"</Link>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState(prompt: EmptyPrompt) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <p class="text-2xl font-semibold text-base-content/60 mb-2">{prompt.title}</p>
            <p class="text-base-content/50 mb-6">{prompt.hint}</p>
            <Link href=prompt.action.to_path() class="btn btn-primary">{prompt.action_label}</Link>
        </div>
    }
}

/// 加载中 / 失败 / 空 / 卡片网格
#[component]
pub fn CropGrid(
    #[prop(into)] cards: Signal<Loadable<Vec<CropCard>>>,
    #[prop(into)] empty: Signal<EmptyPrompt>,
) -> impl IntoView {
    move || match cards.get() {
        Loadable::Loading => view! { <Spinner /> }.into_any(),
        Loadable::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
        Loadable::Empty => view! { <EmptyState prompt=empty.get() /> }.into_any(),
        Loadable::Ready(cards) => view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {cards
                    .into_iter()
                    .map(|card| view! { <CropCardView card=card /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
