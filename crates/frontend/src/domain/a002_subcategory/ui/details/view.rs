use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use leptos::prelude::*;

use super::view_model::{category_options, SubcategoryDetailsViewModel};
use crate::shared::api_utils::use_api;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;

#[component]
pub fn SubcategoryDetails(
    mode: FormMode<Subcategory>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SubcategoryDetailsViewModel::new(&mode);
    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();
    let submit_label = mode.label("Add", "Update");

    let options = Memo::new(move |_| {
        let query = vm.query.get();
        categories.with(|all| category_options(all, &query))
    });
    let can_submit = move || !vm.saving.get() && categories.with(|all| vm.form.with(|f| f.is_valid(all)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        vm.save_command(
            api_client.clone(),
            mode.clone(),
            categories.get_untracked(),
            lifetime.clone(),
            on_saved,
        );
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=move || vm.form.get().name
                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    placeholder="Enter the subcategory name."
                    required
                />
            </div>

            <div class="form-group">
                <label for="description">"Description"</label>
                <input
                    type="text"
                    id="description"
                    prop:value=move || vm.form.get().description
                    on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    placeholder="Enter the subcategory description."
                    required
                />
            </div>

            <div class="form-group">
                <label for="dropdown">"Category"</label>
                <input
                    type="search"
                    class="form-group__filter"
                    prop:value=move || vm.query.get()
                    on:input=move |ev| vm.query.set(event_target_value(&ev))
                    placeholder="Filter categories"
                />
                <select
                    id="dropdown"
                    prop:value=move || {
                        vm.form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| vm.form.update(|f| f.select_category(&event_target_value(&ev)))
                >
                    <option disabled value="">"Select a category"</option>
                    <For
                        each=move || options.get()
                        key=|c: &Category| (c.id, c.name.clone())
                        children=move |category: Category| {
                            let value = category.id.to_string();
                            let is_selected = move || vm.form.with(|f| f.category_id == Some(category.id));
                            view! {
                                <option value=value selected=is_selected>{category.name}</option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="details-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
