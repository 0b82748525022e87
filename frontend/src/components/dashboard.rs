use crate::api::use_store;
use crate::auth::use_auth;
use crate::toast::use_toast;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use xamfi_shared::samples::fallback_activity;
use xamfi_shared::{Booking, ProfileRole, format_price};
use xamfi::{Dashboard, DashboardService, ProfileEditor};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let store = StoredValue::new(use_store());

    let dashboard = RwSignal::new(Option::<Dashboard>::None);
    let editor = RwSignal::new(Option::<ProfileEditor>::None);
    let is_saving = RwSignal::new(false);

    // 身份变化时重新加载
    Effect::new(move |_| {
        let Some(identity) = auth.identity.get() else {
            dashboard.set(None);
            return;
        };
        let store = store.get_value();
        spawn_local(async move {
            let loaded = DashboardService::new(&store).load(&identity).await;
            dashboard.set(Some(loaded));
        });
    });

    let toggle_editor = move |_| {
        if editor.with_untracked(Option::is_some) {
            editor.set(None);
        } else {
            let current = dashboard.with_untracked(|d| d.as_ref().map(|d| ProfileEditor::from_profile(&d.profile)));
            editor.set(current);
        }
    };

    let on_save = move |_| {
        let (Some(mut current), Some(edits)) = (dashboard.get_untracked(), editor.get_untracked()) else {
            return;
        };
        is_saving.set(true);
        // 乐观更新：立即显示编辑后的资料
        dashboard.update(|d| {
            if let Some(d) = d {
                d.profile = edits.apply_to(&d.profile);
            }
        });
        let store = store.get_value();
        spawn_local(async move {
            let result = DashboardService::new(&store).save_profile(&mut current, &edits).await;
            dashboard.set(Some(current));
            match result {
                Ok(()) => {
                    editor.set(None);
                    toast.success("Profil mis à jour !");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Profile save failed: {}", e).into());
                    toast.error("Erreur lors de la mise à jour");
                }
            }
            is_saving.set(false);
        });
    };

    let stats = move || dashboard.with(|d| d.as_ref().map(Dashboard::stats).unwrap_or_default());
    let bookings = move || dashboard.with(|d| d.as_ref().map(|d| d.bookings.clone()).unwrap_or_default());

    view! {
        <Show
            when=move || dashboard.with(Option::is_some)
            fallback=|| view! {
                <div class="flex justify-center py-20">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="max-w-7xl mx-auto p-4 md:p-8 grid grid-cols-1 lg:grid-cols-[300px_1fr] gap-8">
                <aside class="card bg-base-100 shadow-md h-fit">
                    <div class="card-body items-center text-center gap-4">
                        <h3 class="font-bold text-xl">
                            {move || dashboard.with(|d| d.as_ref().map(|d| d.profile.display_name.clone()))}
                        </h3>
                        <p class="text-xs uppercase font-bold text-base-content/50">
                            {move || dashboard.with(|d| d.as_ref().map(|d| d.profile.role.label()))}
                        </p>
                        <button class="btn btn-outline btn-sm w-full" on:click=toggle_editor>
                            {move || if editor.with(Option::is_some) { "Annuler" } else { "Modifier le profil" }}
                        </button>

                        <Show when=move || editor.with(Option::is_some)>
                            <div class="w-full flex flex-col gap-4 pt-4 border-t text-left">
                                <label class="form-control">
                                    <span class="label-text font-bold">"Nom d'affichage"</span>
                                    <input
                                        type="text"
                                        class="input input-bordered input-sm"
                                        prop:value=move || editor.with(|e| e.as_ref().map(|e| e.display_name.clone()).unwrap_or_default())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            editor.update(|e| if let Some(e) = e { e.display_name = value });
                                        }
                                    />
                                </label>
                                <label class="form-control">
                                    <span class="label-text font-bold">"Rôle"</span>
                                    <select
                                        class="select select-bordered select-sm"
                                        prop:value=move || editor.with(|e| e.as_ref().map(|e| e.role.as_str()).unwrap_or_default())
                                        on:change=move |ev| {
                                            if let Some(role) = ProfileRole::parse(&event_target_value(&ev)) {
                                                editor.update(|e| if let Some(e) = e { e.role = role });
                                            }
                                        }
                                    >
                                        {ProfileRole::ALL
                                            .into_iter()
                                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                                            .collect_view()}
                                    </select>
                                </label>
                                <button class="btn btn-primary btn-sm" disabled=move || is_saving.get() on:click=on_save>
                                    "Enregistrer"
                                </button>
                            </div>
                        </Show>
                    </div>
                </aside>

                <div class="space-y-8">
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-title">"Réservations actives"</div>
                            <div class="stat-value text-primary">{move || stats().active_bookings}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Total dépensé"</div>
                            <div class="stat-value text-secondary text-2xl">{move || format_price(stats().total_spent)}</div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Mes Réservations"</h3>
                            <Show
                                when=move || !bookings().is_empty()
                                fallback=|| view! {
                                    <div class="text-center py-8 space-y-4">
                                        <p class="text-base-content/50">"Vous n'avez pas encore de réservation."</p>
                                        <Link to="/marketplace" class="btn btn-primary btn-sm">"Explorer les activités"</Link>
                                    </div>
                                }
                            >
                                <For
                                    each=bookings
                                    key=|b| b.id.clone()
                                    children=|booking| view! { <BookingRow booking=booking /> }
                                />
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn BookingRow(booking: Booking) -> impl IntoView {
    // 预订只记录 activityId，标题取自示例集合
    let title = fallback_activity(&booking.base.activity_id)
        .map(|a| a.title)
        .unwrap_or_else(|| format!("Activité #{}", booking.base.activity_id));
    let href = format!("/activity/{}", booking.base.activity_id);

    view! {
        <div class="flex items-center justify-between p-4 border rounded-xl">
            <div>
                <Link to=href class="font-bold link link-hover">{title}</Link>
                <p class="text-sm text-base-content/70">
                    {booking.base.date.clone()} " · " {format!("{} participant(s)", booking.base.participants)}
                </p>
            </div>
            <div class="text-right">
                <span class="badge badge-outline">{booking.base.status.label()}</span>
                <p class="font-bold text-primary">{format_price(booking.base.total_price)}</p>
            </div>
        </div>
    }
}
