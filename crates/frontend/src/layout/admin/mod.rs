pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use sidebar::Sidebar;
use top_header::TopHeader;

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="app-layout" data-chrome="admin">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left">
                    <Sidebar />
                </div>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
