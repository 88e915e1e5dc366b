use leptos::prelude::*;
use leptos_router::components::A;

use super::cart_item::CartItem;
use crate::domain::a004_cart::context::use_cart;
use crate::domain::a004_cart::model::CartLineItem;
use crate::routes::routes::AppRoute;
use crate::shared::format::format_money;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-page">
            <h1 class="cart-page__title">"Your cart"</h1>
            <Show
                when=move || { cart.total_quantity() > 0 }
                fallback=|| view! {
                    <div class="cart-page__empty">
                        <p>"Your cart is empty."</p>
                        <A href=AppRoute::Home.path()>"Keep shopping"</A>
                    </div>
                }
            >
                <div class="cart-page__items">
                    <For
                        each=move || cart.items()
                        key=|item: &CartLineItem| item.product_id
                        children=|item: CartLineItem| view! { <CartItem item=item /> }
                    />
                </div>
                <div class="cart-page__footer">
                    <button class="btn btn-secondary" on:click=move |_| cart.clear()>"Empty cart"</button>
                    <span class="cart-page__total">
                        "Total: "
                        {move || format_money(cart.total())}
                    </span>
                </div>
            </Show>
        </div>
    }
}
