//! Storefront product grid (the `/home` page)

use contracts::domain::a002_subcategory::aggregate::SubcategoryId;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::domain::a003_product::api;
use crate::domain::a004_cart::context::use_cart;
use crate::domain::a004_cart::model::CartProduct;
use crate::shared::api_utils::use_api;
use crate::shared::config::use_config;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::lifetime::Lifetime;

/// Products shown for the optional `?subcategory=<id>` filter
pub fn visible_products(products: &[Product], subcategory: Option<SubcategoryId>) -> Vec<Product> {
    products
        .iter()
        .filter(|p| match subcategory {
            Some(id) => p.subcategory.as_ref().is_some_and(|s| s.id == id),
            None => true,
        })
        .cloned()
        .collect()
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    let query = use_query_map();
    let cart = use_cart();
    let config = use_config();
    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    spawn_local(async move {
        let result = api::fetch_all(&api_client).await;
        let Some(result) = lifetime.keep("storefront products", result) else {
            return;
        };
        match result {
            Ok(v) => set_products.set(v),
            Err(e) => set_error.set(Some(e.to_string())),
        }
        set_loading.set(false);
    });

    let selected_subcategory = Memo::new(move |_| {
        query.with(|q| q.get("subcategory").and_then(|v| v.parse::<SubcategoryId>().ok()))
    });
    let visible = Memo::new(move |_| {
        products.with(|all| visible_products(all, selected_subcategory.get()))
    });

    let config = StoredValue::new_local(config);
    view! {
        <div class="product-grid-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="page__empty">"No products in this section yet"</p> }
                >
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|p: &Product| p.id
                            children={
                                let config = config.get_value();
                                move |product: Product| {
                                    let image = config.asset_url(product.img.as_deref().unwrap_or_default());
                                    let price = format_money(product.price);
                                    let cart_product = CartProduct::from(&product);
                                    view! {
                                        <div class="product-card">
                                            <img class="product-card__image" src=image alt=product.name.clone() />
                                            <div class="product-card__body">
                                                <h3 class="product-card__name">{product.name.clone()}</h3>
                                                <p class="product-card__description">{product.description.clone()}</p>
                                                <div class="product-card__footer">
                                                    <span class="product-card__price">{price}</span>
                                                    <button
                                                        class="btn btn-primary"
                                                        on:click=move |_| {
                                                            cart.add_item(cart_product.clone(), 1);
                                                        }
                                                    >
                                                        {icon("cart")}
                                                        " Add to cart"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::a002_subcategory::aggregate::Subcategory;

    fn product(id: i64, subcategory: Option<i64>) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            description: String::new(),
            price: 1.0,
            img: None,
            subcategory: subcategory.map(|sid| Subcategory {
                id: sid,
                name: format!("s{}", sid),
                description: String::new(),
                category: Category {
                    id: 1,
                    name: "c".into(),
                    description: String::new(),
                },
            }),
        }
    }

    #[test]
    fn test_visible_products_filter() {
        let all = vec![product(1, Some(10)), product(2, Some(11)), product(3, None)];
        assert_eq!(visible_products(&all, None).len(), 3);
        let ids: Vec<i64> = visible_products(&all, Some(11)).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(visible_products(&all, Some(99)).is_empty());
    }
}
