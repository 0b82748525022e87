use crate::components::activity_card::ActivityCard;
use crate::web::router::Link;
use leptos::prelude::*;
use xamfi_shared::samples::{featured_activities, popular_destinations};

/// 首页：静态的热门目的地和精选活动
#[component]
pub fn HomePage() -> impl IntoView {
    let destinations = popular_destinations();
    let featured = featured_activities();

    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold">"Découvrez l'Afrique autrement"</h1>
                    <p class="py-6 text-base-content/70">
                        "Réservez des visites guidées, excursions en bateau et safaris avec des guides locaux."
                    </p>
                    <Link to="/marketplace" class="btn btn-primary">"Explorer les activités"</Link>
                </div>
            </div>
        </div>

        <section class="max-w-7xl mx-auto p-4 md:p-8 space-y-4">
            <h2 class="text-3xl font-bold">"Destinations populaires"</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {destinations
                    .into_iter()
                    .map(|d| view! {
                        <div class="card image-full shadow-xl">
                            <figure><img src=d.image alt=d.name /></figure>
                            <div class="card-body justify-end">
                                <h3 class="card-title">{d.name}</h3>
                                <p>{format!("{} activités", d.activities)}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="max-w-7xl mx-auto p-4 md:p-8 space-y-4">
            <h2 class="text-3xl font-bold">"Activités à la une"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {featured
                    .into_iter()
                    .map(|activity| view! { <ActivityCard activity=activity /> })
                    .collect_view()}
            </div>
        </section>
    }
}
