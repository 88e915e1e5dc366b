use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a002_subcategory::api as subcategory_api;
use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::form_mode::FormMode;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::lifetime::Lifetime;
use crate::shared::modal::{confirm, Modal};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Product>::new());
    let (subcategories, set_subcategories) = signal(Vec::<Subcategory>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let modal = RwSignal::new(None::<FormMode<Product>>);

    let config = use_config();
    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    let fetch = Callback::new({
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        move |_: ()| {
            let api_client = api_client.clone();
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let products = api::fetch_all(&api_client).await;
                let subs = subcategory_api::fetch_all(&api_client).await;
                let Some((products, subs)) = lifetime.keep("products", (products, subs)) else {
                    return;
                };
                match (products, subs) {
                    (Ok(products), Ok(subs)) => {
                        set_items.set(products);
                        set_subcategories.set(subs);
                        set_error.set(None);
                    }
                    (Err(e), _) | (_, Err(e)) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });
    fetch.run(());

    let delete_product = move |product: Product| {
        if !confirm(&format!("Delete product \"{}\"?", product.name)) {
            return;
        }
        let api_client = api_client.clone();
        let lifetime = lifetime.clone();
        spawn_local(async move {
            let result = api::delete(&api_client, product.id).await;
            if lifetime.keep("delete product", ()).is_none() {
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

    let delete_product = StoredValue::new_local(delete_product);
    let config = StoredValue::new_local(config);
    view! {
        <div class="page">
            <PageHeader title="Products">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(Some(FormMode::Create))
                >
                    {icon("add")}
                    " Add product"
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
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Subcategory"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|p: &Product| (p.id, p.name.clone(), p.price.to_bits(), p.img.clone(), p.subcategory.as_ref().map(|s| s.id))
                                children={
                                    let delete_product = delete_product.get_value();
                                    let config = config.get_value();
                                    move |product: Product| {
                                        let image = config.asset_url(product.img.as_deref().unwrap_or_default());
                                        let subcategory = product.subcategory_name().to_string();
                                        let price = format_money(product.price);
                                        let for_edit = product.clone();
                                        let for_delete = product.clone();
                                        let delete_product = delete_product.clone();
                                        let alt = product.name.clone();
                                        let name = product.name.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <img class="product-thumb" src=image alt=alt />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{subcategory}</TableCellLayout>
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
                                                            on:click=move |_| delete_product(for_delete.clone())
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
                        <p class="page__empty">"No products to show"</p>
                    </Show>
                </Show>
            </div>

            {move || modal.get().map(|mode| {
                let title = mode.label("Add product", "Edit product");
                view! {
                    <Modal title=title on_close=close_modal>
                        <ProductDetails
                            mode=mode
                            subcategories=subcategories
                            on_saved=on_saved
                            on_cancel=close_modal
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
