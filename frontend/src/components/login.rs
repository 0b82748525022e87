use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;
use xamfi::IdentityProvider;

/// 登录与注册共用同一个模拟登录流程，只是文案不同
#[component]
pub fn LoginPage(#[prop(optional)] register: bool) -> impl IntoView {
    let auth = use_auth();

    let (title, subtitle, action) = if register {
        ("Créer un compte", "Rejoignez Xamfi pour réserver vos expériences.", "S'inscrire")
    } else {
        ("Bon retour", "Connectez-vous pour gérer vos réservations.", "Se connecter")
    };

    // 登录后路由服务会将 /login、/register 重定向至控制面板
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.login();
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-base-content/70">{subtitle}</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div role="alert" class="alert alert-info text-sm py-2">
                            <span>"Mode test : connexion simulée avec un compte de démonstration."</span>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">{action}</button>
                        </div>
                        {if register {
                            view! { <Link to="/login" class="link link-hover text-sm text-center">"Déjà un compte ? Se connecter"</Link> }.into_any()
                        } else {
                            view! { <Link to="/register" class="link link-hover text-sm text-center">"Pas encore de compte ? S'inscrire"</Link> }.into_any()
                        }}
                    </form>
                </div>
            </div>
        </div>
    }
}
