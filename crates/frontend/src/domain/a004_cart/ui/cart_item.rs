use leptos::prelude::*;

use crate::domain::a004_cart::context::use_cart;
use crate::domain::a004_cart::model::CartLineItem;
use crate::shared::config::use_config;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// One cart line with a quantity stepper.
///
/// Stepping below 1 removes the line; the delete button removes it at any quantity.
#[component]
pub fn CartItem(item: CartLineItem) -> impl IntoView {
    let cart = use_cart();
    let config = use_config();
    let product = item.product();
    let id = item.product_id;
    let image = config.asset_url(item.img.as_deref().unwrap_or_default());

    // Live line from the cart so the subtotal follows every quantity change
    let line = Memo::new(move |_| cart.line(id));
    let quantity = move || line.with(|l| l.as_ref().map(|l| l.quantity).unwrap_or(0));
    let subtotal = move || line.with(|l| l.as_ref().map(CartLineItem::subtotal).unwrap_or(0.0));

    let decrement = {
        let product = product.clone();
        move |_| {
            cart.add_item(product.clone(), -1);
        }
    };
    let increment = move |_| {
        cart.add_item(product.clone(), 1);
    };

    view! {
        <div class="cart-item">
            <div class="cart-item__identity">
                <img class="cart-item__image" src=image alt=item.name.clone() />
                <div>
                    <h3 class="cart-item__name">{item.name.clone()}</h3>
                    <div class="cart-item__stepper">
                        <span>"Quantity:"</span>
                        <button class="cart-item__step" title="Less" on:click=decrement>
                            {icon("minus")}
                        </button>
                        <span class="cart-item__quantity">{quantity}</span>
                        <button class="cart-item__step cart-item__step--add" title="More" on:click=increment>
                            {icon("plus")}
                        </button>
                    </div>
                </div>
            </div>

            <div class="cart-item__summary">
                <span class="cart-item__subtotal">{move || format_money(subtotal())}</span>
                <button class="cart-item__remove" title="Remove" on:click=move |_| cart.remove_item(id)>
                    {icon("delete")}
                </button>
            </div>
        </div>
    }
}
