use crate::api::use_store;
use crate::auth::use_auth;
use crate::toast::use_toast;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use xamfi_shared::{Activity, format_price};
use xamfi::{BookingError, BookingForm, BookingService, DetailService};

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Found(Activity),
    Missing,
}

#[component]
pub fn ActivityDetailPage(id: String) -> impl IntoView {
    let store = use_store();
    let state = RwSignal::new(DetailState::Loading);

    {
        let store = store.clone();
        spawn_local(async move {
            let loaded = DetailService::new(&store).load(&id).await;
            state.set(match loaded {
                Some((activity, _)) => DetailState::Found(activity),
                None => DetailState::Missing,
            });
        });
    }

    move || match state.get() {
        DetailState::Loading => view! {
            <div class="text-center py-20 animate-pulse">"Chargement de l'expérience..."</div>
        }
        .into_any(),
        DetailState::Missing => view! {
            <div class="text-center py-20 space-y-4">
                <p>"Expérience introuvable."</p>
                <Link to="/marketplace" class="btn btn-ghost">"Retour aux activités"</Link>
            </div>
        }
        .into_any(),
        DetailState::Found(activity) => view! {
            <ActivityDetail activity=activity store=store.clone() />
        }
        .into_any(),
    }
}

#[component]
fn ActivityDetail(activity: Activity, store: crate::api::AppStore) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();

    let form = RwSignal::new(BookingForm::new());
    let is_submitting = RwSignal::new(false);
    let price = activity.price;
    let activity = StoredValue::new(activity);
    let store = StoredValue::new(store);

    let total = move || {
        form.with(|f| f.total_for(price))
            .map(format_price)
            .unwrap_or_else(|| "-".to_string())
    };

    let on_book = move |_| {
        if is_submitting.get_untracked() {
            return;
        }
        is_submitting.set(true);
        let store = store.get_value();
        let activity = activity.get_value();
        let current = form.get_untracked();
        spawn_local(async move {
            match BookingService::new(&store, &auth).submit(&activity, &current).await {
                Ok(_) => toast.success("Demande de réservation envoyée !"),
                Err(e) => {
                    if let BookingError::Store(inner) = &e {
                        web_sys::console::error_1(&format!("Booking failed: {}", inner).into());
                    }
                    toast.error(e.to_string());
                }
            }
            is_submitting.set(false);
        });
    };

    let a = activity.get_value();
    let rating = a.rating.map(|r| format!("★ {:.1}", r));

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <Link to="/marketplace" class="link link-hover text-sm">"← Retour aux activités"</Link>

            <div class="grid grid-cols-1 lg:grid-cols-[1fr_400px] gap-12">
                <div class="space-y-6">
                    <p class="text-primary text-sm font-bold uppercase">{a.location.clone()}</p>
                    <h1 class="text-4xl md:text-5xl font-bold">{a.title.clone()}</h1>
                    <div class="flex gap-6 text-base-content/70">
                        {rating.map(|r| view! { <span class="text-warning">{r}</span> })}
                        <span>{a.duration.clone()}</span>
                        <span class="badge badge-secondary">{a.kind.clone()}</span>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {a.images
                            .iter()
                            .map(|src| view! {
                                <img src=src.clone() alt=a.title.clone() class="rounded-2xl w-full h-64 object-cover" />
                            })
                            .collect_view()}
                    </div>

                    <h2 class="text-2xl font-bold border-b pb-4">"À propos de cette expérience"</h2>
                    <p class="whitespace-pre-line text-base-content/70 text-lg">{a.description.clone()}</p>
                </div>

                <aside class="card bg-base-100 shadow-xl h-fit sticky top-24">
                    <div class="card-body gap-6">
                        <div class="text-3xl font-bold text-primary">
                            {format_price(a.price)}
                            <span class="text-sm text-base-content/50 font-normal">" / personne"</span>
                        </div>

                        <label class="form-control">
                            <span class="label-text font-bold">"Date de l'expérience"</span>
                            <input
                                type="date"
                                class="input input-bordered"
                                prop:value=move || form.with(|f| f.date.clone())
                                on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                            />
                        </label>

                        <div class="form-control">
                            <span class="label-text font-bold">"Nombre de participants"</span>
                            <div class="join">
                                <button class="btn join-item" on:click=move |_| form.update(BookingForm::decrement)>"-"</button>
                                <span class="btn join-item no-animation">{move || form.with(BookingForm::participants)}</span>
                                <button class="btn join-item" on:click=move |_| form.update(BookingForm::increment)>"+"</button>
                            </div>
                        </div>

                        <div class="flex justify-between text-lg border-t pt-4">
                            <span>"Total"</span>
                            <span class="font-bold">{total}</span>
                        </div>

                        <button
                            class="btn btn-primary btn-lg"
                            disabled=move || is_submitting.get()
                            on:click=on_book
                        >
                            {move || if auth.identity.with(Option::is_some) {
                                "Réserver maintenant"
                            } else {
                                "Se connecter pour réserver"
                            }}
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
