//! Collapsible storefront menu: categories with their subcategories.

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api as subcategory_api;
use crate::routes::routes::AppRoute;
use crate::shared::api_utils::use_api;
use crate::shared::icons::icon;
use crate::shared::lifetime::Lifetime;
use crate::shared::list_utils::compare_names;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub category: Category,
    pub subcategories: Vec<Subcategory>,
}

/// Groups subcategories under their category, both sorted by name.
///
/// Categories without subcategories are kept; subcategories whose category
/// is unknown are dropped.
pub fn group_by_category(
    categories: &[Category],
    subcategories: &[Subcategory],
) -> Vec<MenuGroup> {
    let mut groups: Vec<MenuGroup> = categories
        .iter()
        .map(|category| {
            let mut subs: Vec<Subcategory> = subcategories
                .iter()
                .filter(|s| s.category_id() == category.id)
                .cloned()
                .collect();
            subs.sort_by(|a, b| compare_names(&a.name, &b.name));
            MenuGroup {
                category: category.clone(),
                subcategories: subs,
            }
        })
        .collect();
    groups.sort_by(|a, b| compare_names(&a.category.name, &b.category.name));
    groups
}

pub fn subcategory_href(id: i64) -> String {
    format!("{}?subcategory={}", AppRoute::Home.path(), id)
}

#[component]
pub fn CategoryMenu() -> impl IntoView {
    let (groups, set_groups) = signal(Vec::<MenuGroup>::new());
    let (error, set_error) = signal(None::<String>);
    let expanded = RwSignal::new(None::<i64>);

    let api_client = use_api();
    let lifetime = Lifetime::of_current_view();

    spawn_local(async move {
        let categories = category_api::fetch_all(&api_client).await;
        let subcategories = subcategory_api::fetch_all(&api_client).await;
        let Some(result) = lifetime.keep("category menu", (categories, subcategories)) else {
            return;
        };
        match result {
            (Ok(cats), Ok(subs)) => set_groups.set(group_by_category(&cats, &subs)),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("category menu: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <aside class="category-menu">
            <A href=AppRoute::Home.path() attr:class="category-menu__all">"All products"</A>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ul class="category-menu__groups">
                <For
                    each=move || groups.get()
                    key=|g| (g.category.id, g.category.name.clone(), g.subcategories.len())
                    children=move |group| {
                        let id = group.category.id;
                        let is_open = move || expanded.get() == Some(id);
                        let toggle = move |_| {
                            expanded.update(|current| {
                                *current = if *current == Some(id) { None } else { Some(id) };
                            })
                        };
                        let subcategories = group.subcategories;
                        view! {
                            <li class="category-menu__group">
                                <button class="category-menu__category" on:click=toggle>
                                    {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                    <span>{group.category.name}</span>
                                </button>
                                <Show when=is_open>
                                    <ul class="category-menu__subcategories">
                                        {subcategories
                                            .clone()
                                            .into_iter()
                                            .map(|s| view! {
                                                <li>
                                                    <A href=subcategory_href(s.id)>{s.name.clone()}</A>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn subcategory(id: i64, name: &str, parent: &Category) -> Subcategory {
        Subcategory {
            id,
            name: name.to_string(),
            description: String::new(),
            category: parent.clone(),
        }
    }

    #[test]
    fn test_groups_sorted_by_name() {
        let tools = category(1, "tools");
        let apparel = category(2, "Apparel");
        let subs = vec![
            subcategory(10, "Saws", &tools),
            subcategory(11, "hammers", &tools),
            subcategory(12, "Shirts", &apparel),
        ];

        let groups = group_by_category(&[tools, apparel], &subs);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category.name, "Apparel");
        assert_eq!(groups[1].category.name, "tools");
        let names: Vec<_> = groups[1].subcategories.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["hammers", "Saws"]);
    }

    #[test]
    fn test_empty_category_kept_orphan_dropped() {
        let books = category(3, "Books");
        let gone = category(99, "Gone");
        let subs = vec![subcategory(20, "Orphan", &gone)];

        let groups = group_by_category(&[books], &subs);

        assert_eq!(groups.len(), 1);
        assert!(groups[0].subcategories.is_empty());
    }

    #[test]
    fn test_subcategory_href() {
        assert_eq!(subcategory_href(7), "/home?subcategory=7");
    }
}
