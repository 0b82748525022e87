use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use xamfi::IdentityProvider;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_login = move |_| {
        auth.login();
        router.navigate("/dashboard");
    };
    let on_logout = move |_| auth.logout();

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-40">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl font-bold text-primary">"Xamfi"</Link>
            </div>
            <div class="flex-none gap-2">
                <Link to="/marketplace" class="btn btn-ghost">"Activités"</Link>
                <Show
                    when=move || auth.identity.with(Option::is_some)
                    fallback=move || view! {
                        <button class="btn btn-primary" on:click=on_login>"Connexion"</button>
                    }
                >
                    <Link to="/dashboard" class="btn btn-ghost">"Mon espace"</Link>
                    <button class="btn btn-outline btn-error" on:click=on_logout>"Déconnexion"</button>
                </Show>
            </div>
        </div>
    }
}
