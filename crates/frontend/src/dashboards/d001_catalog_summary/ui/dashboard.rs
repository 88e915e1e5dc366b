use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api as subcategory_api;
use crate::domain::a003_product::api as product_api;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::lifetime::Lifetime;

/// Admin landing page with catalog counts
#[component]
pub fn CatalogSummaryDashboard() -> impl IntoView {
    let categories = RwSignal::new(None::<usize>);
    let subcategories = RwSignal::new(None::<usize>);
    let products = RwSignal::new(None::<usize>);
    let (error, set_error) = signal(None::<String>);

    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    spawn_local(async move {
        let (c, s, p) = (
            category_api::fetch_all(&api_client).await,
            subcategory_api::fetch_all(&api_client).await,
            product_api::fetch_all(&api_client).await,
        );
        let Some((c, s, p)) = lifetime.keep("dashboard", (c, s, p)) else {
            return;
        };

        let mut failures = Vec::new();
        for (target, result) in [
            (categories, c.map(|v| v.len())),
            (subcategories, s.map(|v| v.len())),
            (products, p.map(|v| v.len())),
        ] {
            match result {
                Ok(count) => target.set(Some(count)),
                Err(e) => failures.push(e.to_string()),
            }
        }
        if !failures.is_empty() {
            set_error.set(Some(failures.join("; ")));
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Catalog overview".to_string()>
                {()}
            </PageHeader>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="stat-grid">
                <StatCard label="Categories" icon_name="categories" value=categories />
                <StatCard label="Subcategories" icon_name="subcategories" value=subcategories />
                <StatCard label="Products" icon_name="products" value=products />
            </div>
        </div>
    }
}
