mod state;

pub use state::{CategoryListState, CategorySortField};

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form_mode::FormMode;
use crate::shared::icons::icon;
use crate::shared::lifetime::Lifetime;
use crate::shared::modal::{confirm, Modal};

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Category>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let search_query = RwSignal::new(String::new());
    let list_state = RwSignal::new(CategoryListState::default());
    let modal = RwSignal::new(None::<FormMode<Category>>);

    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    let fetch = Callback::new({
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        move |_: ()| {
            let api_client = api_client.clone();
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let result = api::fetch_all(&api_client).await;
                let Some(result) = lifetime.keep("categories", result) else {
                    return;
                };
                match result {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });
    fetch.run(());

    let rows = Memo::new(move |_| {
        let query = search_query.get();
        list_state.with(|s| s.apply(items.get(), &query))
    });

    let delete_category = move |category: Category| {
        if !confirm(&format!("Delete category \"{}\"?", category.name)) {
            return;
        }
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        spawn_local(async move {
            let result = api::delete(&api_client, category.id).await;
            if lifetime.keep("delete category", ()).is_none() {
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

    let delete_category = StoredValue::new_local(delete_category);
    view! {
        <div class="page">
            <PageHeader title="Categories">
                <div style="width: 300px;">
                    <Input value=search_query placeholder="Search by name or description..." />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(Some(FormMode::Create))
                >
                    {icon("add")}
                    " Add category"
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
                                <TableHeaderCell min_width=200.0>
                                    <div
                                        class="sortable-header"
                                        on:click=move |_| list_state.update(|s| s.toggle(CategorySortField::Name))
                                    >
                                        "Name"
                                        {move || list_state.with(|s| s.indicator(CategorySortField::Name))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=300.0>
                                    <div
                                        class="sortable-header"
                                        on:click=move |_| list_state.update(|s| s.toggle(CategorySortField::Description))
                                    >
                                        "Description"
                                        {move || list_state.with(|s| s.indicator(CategorySortField::Description))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|c: &Category| (c.id, c.name.clone(), c.description.clone())
                                children={
                                    let delete_category = delete_category.get_value();
                                    move |category: Category| {
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
                                        let delete_category = delete_category.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{category.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{category.description.clone()}</TableCellLayout>
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
                                                            on:click=move |_| delete_category(for_delete.clone())
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
                    <Show when=move || rows.with(Vec::is_empty)>
                        <p class="page__empty">"No categories to show"</p>
                    </Show>
                </Show>
            </div>

            {move || modal.get().map(|mode| {
                let title = mode.label("Add category", "Edit category");
                view! {
                    <Modal title=title on_close=close_modal>
                        <CategoryDetails mode=mode on_saved=on_saved on_cancel=close_modal />
                    </Modal>
                }
            })}
        </div>
    }
}
