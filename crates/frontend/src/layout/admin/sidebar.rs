use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::{routes_with_chrome, AppRoute, Chrome};
use crate::shared::icons::icon;

fn menu_icon(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "dashboard",
        AppRoute::Products => "products",
        AppRoute::Categories => "categories",
        AppRoute::Subcategories => "subcategories",
        AppRoute::AddCategory => "add",
        _ => "chevron-right",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {routes_with_chrome(Chrome::Admin).map(|route| {
                    view! {
                        <li class="sidebar__item">
                            <A href=route.path()>
                                {icon(menu_icon(route))}
                                <span>{route.title()}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
