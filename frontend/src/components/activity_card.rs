use crate::web::router::Link;
use leptos::prelude::*;
use xamfi_shared::{Activity, format_price};

/// 目录与首页共用的活动卡片，点击进入详情页
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let href = format!("/activity/{}", activity.id);
    let cover = activity.cover_image().map(str::to_string);
    let rating = activity.rating.map(|r| format!("★ {:.1}", r));

    view! {
        <Link to=href class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
            <figure class="h-48 bg-base-300">
                {cover.map(|src| view! { <img src=src alt=activity.title.clone() class="h-full w-full object-cover" /> })}
            </figure>
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <span class="badge badge-secondary">{activity.kind.clone()}</span>
                    {rating.map(|r| view! { <span class="text-warning text-sm">{r}</span> })}
                </div>
                <h2 class="card-title">{activity.title.clone()}</h2>
                <p class="text-sm text-base-content/70">{activity.location.clone()} " · " {activity.duration.clone()}</p>
                <div class="card-actions justify-end">
                    <span class="text-lg font-bold text-primary">{format_price(activity.price)}</span>
                </div>
            </div>
        </Link>
    }
}
