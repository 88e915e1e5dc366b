use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::details::CategoryDetails;
use crate::routes::routes::AppRoute;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form_mode::FormMode;

/// Standalone category form; returns to the category list once saved.
#[component]
pub fn AddCategoryPage() -> impl IntoView {
    let on_saved = {
        let navigate = use_navigate();
        Callback::new(move |_| navigate(AppRoute::Categories.path(), Default::default()))
    };
    let on_cancel = {
        let navigate = use_navigate();
        Callback::new(move |_| navigate(AppRoute::Categories.path(), Default::default()))
    };

    view! {
        <div class="page">
            <PageHeader title="Add category">
                {()}
            </PageHeader>
            <div class="page__content details-container">
                <CategoryDetails mode=FormMode::Create on_saved=on_saved on_cancel=on_cancel />
            </div>
        </div>
    }
}
