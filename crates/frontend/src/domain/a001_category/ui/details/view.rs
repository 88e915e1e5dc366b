use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use super::view_model::CategoryDetailsViewModel;
use crate::shared::api_utils::use_api;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;

#[component]
pub fn CategoryDetails(
    mode: FormMode<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(&mode);
    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();
    let submit_label = mode.label("Add", "Update");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.can_submit() {
            vm.save_command(api_client.clone(), mode.clone(), lifetime.clone(), on_saved);
        }
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <div class="form-group">
                <label for="category-name">"Name"</label>
                <input
                    type="text"
                    id="category-name"
                    prop:value=move || vm.form.get().name
                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    placeholder="Category name"
                    required
                />
            </div>

            <div class="form-group">
                <label for="category-description">"Description"</label>
                <input
                    type="text"
                    id="category-description"
                    prop:value=move || vm.form.get().description
                    on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    placeholder="Category description"
                    required
                />
            </div>

            <div class="details-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || !vm.can_submit()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
