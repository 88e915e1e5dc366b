use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;

use super::view_model::{subcategory_options, ProductDetailsViewModel};
use crate::shared::api_utils::use_api;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;

#[component]
pub fn ProductDetails(
    mode: FormMode<Product>,
    #[prop(into)] subcategories: Signal<Vec<Subcategory>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(&mode);
    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();
    let submit_label = mode.label("Add", "Update");
    let options = Memo::new(move |_| subcategories.with(|all| subcategory_options(all)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.saving.get_untracked() {
            return;
        }
        vm.save_command(
            api_client.clone(),
            mode.clone(),
            subcategories.get_untracked(),
            lifetime.clone(),
            on_saved,
        );
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-group">
                <label for="product-name">"Name"</label>
                <input
                    type="text"
                    id="product-name"
                    prop:value=move || vm.form.get().name
                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="product-description">"Description"</label>
                <input
                    type="text"
                    id="product-description"
                    prop:value=move || vm.form.get().description
                    on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="product-price">"Price"</label>
                <input
                    type="text"
                    id="product-price"
                    inputmode="decimal"
                    prop:value=move || vm.form.get().price
                    on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="product-img">"Image path"</label>
                <input
                    type="text"
                    id="product-img"
                    prop:value=move || vm.form.get().img
                    on:input=move |ev| vm.form.update(|f| f.img = event_target_value(&ev))
                    placeholder="/images/product.png"
                />
            </div>

            <div class="form-group">
                <label for="product-subcategory">"Subcategory"</label>
                <select
                    id="product-subcategory"
                    prop:value=move || {
                        vm.form.with(|f| f.subcategory_id.map(|id| id.to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| vm.form.update(|f| f.select_subcategory(&event_target_value(&ev)))
                >
                    <option value="">"No subcategory"</option>
                    <For
                        each=move || options.get()
                        key=|s: &Subcategory| (s.id, s.name.clone())
                        children=move |subcategory: Subcategory| {
                            let value = subcategory.id.to_string();
                            let is_selected = move || vm.form.with(|f| f.subcategory_id == Some(subcategory.id));
                            view! {
                                <option value=value selected=is_selected>{subcategory.name}</option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="details-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
