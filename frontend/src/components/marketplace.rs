use crate::api::use_store;
use crate::components::activity_card::ActivityCard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use xamfi_shared::catalog::{ALL_CATEGORIES, CATEGORIES, CatalogFilter, Category};
use xamfi::{Catalog, CatalogService, DataSource};

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let store = use_store();

    let catalog = RwSignal::new(Option::<Catalog>::None);
    let filter = RwSignal::new(CatalogFilter::default());

    // 初始加载：远端为空或失败时服务层已降级为示例数据
    spawn_local(async move {
        let limit = store.config().catalog_limit;
        let loaded = CatalogService::new(&store, limit).load().await;
        catalog.set(Some(loaded));
    });

    let visible = Memo::new(move |_| {
        let current = filter.get();
        catalog.with(|c| c.as_ref().map(|c| c.filter(&current)).unwrap_or_default())
    });

    let is_loading = move || catalog.with(Option::is_none);
    let is_fallback = move || {
        catalog.with(|c| c.as_ref().is_some_and(|c| c.source == DataSource::Fallback))
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div>
                <h1 class="text-4xl font-bold">"Toutes les activités"</h1>
                <Show when=is_fallback>
                    <p class="text-sm text-base-content/50">"Sélection d'exemples"</p>
                </Show>
            </div>

            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    placeholder="Rechercher une activité ou un lieu..."
                    class="input input-bordered w-full md:max-w-md"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <div class="flex flex-wrap gap-2">
                    {CATEGORIES
                        .into_iter()
                        .map(|name| {
                            let category = Category::parse(name);
                            let selected = {
                                let category = category.clone();
                                move || filter.with(|f| f.category == category)
                            };
                            view! {
                                <button
                                    class=move || if selected() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }
                                    on:click=move |_| filter.update(|f| f.category = category.clone())
                                >
                                    {if name == ALL_CATEGORIES { "Tous" } else { name }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || !is_loading()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <p class="text-base-content/70">
                    {move || format!("{} activités trouvées", visible.with(Vec::len))}
                </p>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <div class="text-center py-16 space-y-4">
                            <p class="text-base-content/50">"Aucune activité ne correspond à votre recherche."</p>
                            <button class="btn btn-ghost" on:click=move |_| filter.update(CatalogFilter::reset)>
                                "Réinitialiser les filtres"
                            </button>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <For
                            each=move || visible.get()
                            key=|activity| activity.id.clone()
                            children=move |activity| view! { <ActivityCard activity=activity /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
