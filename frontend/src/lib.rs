//! Xamfi 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 数据存储（通过 Context 共享）
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    mod activity_card;
    pub mod activity_detail;
    pub mod dashboard;
    pub mod home;
    pub mod login;
    pub mod marketplace;
    pub mod navbar;
}
mod toast;

use crate::auth::{AuthContext, init_auth};
use crate::components::activity_detail::ActivityDetailPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::marketplace::MarketplacePage;
use crate::components::navbar::Navbar;
use crate::toast::{ToastContext, ToastHost};

use leptos::prelude::*;
use leptos::task::spawn_local;
use xamfi::seed_activities;

// 浏览器 API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <LoginPage register=true /> }.into_any(),
        AppRoute::Marketplace => view! { <MarketplacePage /> }.into_any(),
        AppRoute::Activity(id) => view! { <ActivityDetailPage id=id /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl">"Page introuvable"</p>
                    <Link to="/" class="btn btn-ghost">"Retour à l'accueil"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文，并从 LocalStorage 恢复身份
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 共享数据存储与提示消息
    let store = api::app_store();
    provide_context(store.clone());
    provide_context(ToastContext::new());

    // 远端活动集合为空时写入示例数据，不阻塞界面
    spawn_local(async move {
        if let Err(e) = seed_activities(&store).await {
            web_sys::console::error_1(&format!("Seeding failed: {}", e).into());
        }
    });

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200 font-sans">
                <Navbar />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}
