use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-9xl font-bold text-primary">"404"</h1>
            <h2 class="text-3xl font-semibold mt-4">"Page Not Found"</h2>
            <p class="text-base-content/70 mt-2 mb-8">"The page you are looking for doesn't exist or has been moved."</p>
            <Link href="/".to_string() class="btn btn-primary">"Go Back Home"</Link>
        </div>
    }
}
