use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api;
use crate::domain::a002_subcategory::ui::details::SubcategoryDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form_mode::FormMode;
use crate::shared::icons::icon;
use crate::shared::lifetime::Lifetime;
use crate::shared::list_utils::compare_names;
use crate::shared::modal::{confirm, Modal};

#[component]
#[allow(non_snake_case)]
pub fn SubcategoryList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Subcategory>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let modal = RwSignal::new(None::<FormMode<Subcategory>>);

    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    let fetch = Callback::new({
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        move |_: ()| {
            let api_client = api_client.clone();
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let subcategories = api::fetch_all(&api_client).await;
                let all_categories = category_api::fetch_all(&api_client).await;
                let Some((subcategories, all_categories)) =
                    lifetime.keep("subcategories", (subcategories, all_categories))
                else {
                    return;
                };
                match (subcategories, all_categories) {
                    (Ok(mut subs), Ok(cats)) => {
                        subs.sort_by(|a, b| compare_names(&a.name, &b.name));
                        set_items.set(subs);
                        set_categories.set(cats);
                        set_error.set(None);
                    }
                    (Err(e), _) | (_, Err(e)) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });
    fetch.run(());

    let delete_subcategory = move |subcategory: Subcategory| {
        if !confirm(&format!("Delete subcategory \"{}\"?", subcategory.name)) {
            return;
        }
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        spawn_local(async move {
            let result = api::delete(&api_client, subcategory.id).await;
            if lifetime.keep("delete subcategory", ()).is_none() {
                return;
            }
            match result {
                Ok(()) => fetch.run(()),
                Err(e) => set_error.set(Some(format!("Delete failed: {}", e))),
            }
        });
    };

    let close_modal = Callback::new(move |_| modal.set(None));
    let on_saved = Callback::new(move |_| {
        modal.set(None);
        fetch.run(());
    });

    let delete_subcategory = StoredValue::new_local(delete_subcategory);
    view! {
        <div class="page">
            <PageHeader title="Subcategories">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(Some(FormMode::Create))
                >
                    {icon("add")}
                    " Add subcategory"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=300.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|s: &Subcategory| (s.id, s.name.clone(), s.description.clone(), s.category_id())
                                children={
                                    let delete_subcategory = delete_subcategory.get_value();
                                    move |subcategory: Subcategory| {
                                        let for_edit = subcategory.clone();
                                        let for_delete = subcategory.clone();
                                        let delete_subcategory = delete_subcategory.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{subcategory.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{subcategory.description.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{subcategory.category.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <button
                                                            class="button button--icon"
                                                            title="Edit"
                                                            on:click=move |_| modal.set(Some(FormMode::Edit(for_edit.clone())))
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                        <button
                                                            class="button button--icon"
                                                            title="Delete"
                                                            on:click=move |_| delete_subcategory(for_delete.clone())
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || items.with(Vec::is_empty)>
                        <p class="page__empty">"No subcategories to show"</p>
                    </Show>
                </Show>
            </div>

            {move || modal.get().map(|mode| {
                let title = mode.label("Add subcategory", "Edit subcategory");
                view! {
                    <Modal title=title on_close=close_modal>
                        <SubcategoryDetails
                            mode=mode
                            categories=categories
                            on_saved=on_saved
                            on_cancel=close_modal
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
