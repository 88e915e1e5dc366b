use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_subcategory::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;
use crate::shared::list_utils::{compare_names, contains_ci};
use crate::shared::modal::{alert, SAVE_FAILED_MESSAGE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubcategoryForm {
    pub name: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
}

impl SubcategoryForm {
    /// Empty for `Create`; every field copied from the record for `Edit`
    pub fn from_mode(mode: &FormMode<Subcategory>) -> Self {
        match mode.existing() {
            Some(existing) => Self {
                name: existing.name.clone(),
                description: existing.description.clone(),
                category_id: Some(existing.category_id()),
            },
            None => Self::default(),
        }
    }

    /// Category object matching the selected id, looked up in `categories`
    pub fn resolve_category<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        let id = self.category_id?;
        categories.iter().find(|c| c.id == id)
    }

    /// Applies the raw `<select>` value; anything unparsable clears the selection
    pub fn select_category(&mut self, raw: &str) {
        self.category_id = raw.trim().parse::<CategoryId>().ok();
    }

    pub fn is_valid(&self, categories: &[Category]) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.resolve_category(categories).is_some()
    }

    pub fn to_payload(&self, categories: &[Category]) -> SubcategoryPayload {
        SubcategoryPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.resolve_category(categories).cloned(),
        }
    }
}

/// Dropdown options: categories whose name contains `query`, sorted by name
pub fn category_options(categories: &[Category], query: &str) -> Vec<Category> {
    let mut options: Vec<Category> = categories
        .iter()
        .filter(|c| contains_ci(&c.name, query))
        .cloned()
        .collect();
    options.sort_by(|a, b| compare_names(&a.name, &b.name));
    options
}

#[derive(Clone, Copy)]
pub struct SubcategoryDetailsViewModel {
    pub form: RwSignal<SubcategoryForm>,
    pub query: RwSignal<String>,
    pub saving: RwSignal<bool>,
}

impl SubcategoryDetailsViewModel {
    pub fn new(mode: &FormMode<Subcategory>) -> Self {
        Self {
            form: RwSignal::new(SubcategoryForm::from_mode(mode)),
            query: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(
        &self,
        api_client: ApiClient,
        mode: FormMode<Subcategory>,
        categories: Vec<Category>,
        lifetime: Lifetime,
        on_saved: Callback<()>,
    ) {
        let payload = self.form.with_untracked(|f| f.to_payload(&categories));
        let saving = self.saving;
        saving.set(true);

        spawn_local(async move {
            let result = match &mode {
                FormMode::Create => api::create(&api_client, &payload).await,
                FormMode::Edit(existing) => api::update(&api_client, existing.id, &payload).await,
            };
            let Some(result) = lifetime.keep("save subcategory", result) else {
                return;
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    log::info!("subcategory '{}' saved", payload.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("saving subcategory failed: {}", e);
                    alert(SAVE_FAILED_MESSAGE);
                }
            }
        });
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

    fn categories() -> Vec<Category> {
        vec![category(1, "Lácteos"), category(2, "almacén"), category(3, "Bebidas")]
    }

    fn existing() -> Subcategory {
        Subcategory {
            id: 9,
            name: "Gaseosas".into(),
            description: "Con gas".into(),
            category: Category {
                id: 3,
                name: "Bebidas (stale copy)".into(),
                description: String::new(),
            },
        }
    }

    #[test]
    fn test_edit_populates_every_field() {
        let cats = categories();
        let form = SubcategoryForm::from_mode(&FormMode::Edit(existing()));
        assert_eq!(form.name, "Gaseosas");
        assert_eq!(form.description, "Con gas");
        assert_eq!(form.category_id, Some(3));
        // resolved from the provided list, not the nested copy
        assert_eq!(form.resolve_category(&cats), Some(&cats[2]));
    }

    #[test]
    fn test_create_is_empty() {
        let form = SubcategoryForm::from_mode(&FormMode::Create);
        assert_eq!(form, SubcategoryForm::default());
        assert_eq!(form.resolve_category(&categories()), None);
        assert!(!form.is_valid(&categories()));
    }

    #[test]
    fn test_options_sorted_by_name() {
        let names: Vec<String> = category_options(&categories(), "")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["almacén", "Bebidas", "Lácteos"]);
    }

    #[test]
    fn test_options_filtered_by_query() {
        let options = category_options(&categories(), "BEB");
        assert_eq!(options, vec![category(3, "Bebidas")]);
    }

    #[test]
    fn test_payload_carries_resolved_category() {
        let cats = categories();
        let mut form = SubcategoryForm {
            name: "Quesos".into(),
            description: "Duros".into(),
            category_id: None,
        };
        form.select_category("1");
        let payload = form.to_payload(&cats);
        assert_eq!(payload.category, Some(cats[0].clone()));
        assert!(form.is_valid(&cats));

        form.select_category("");
        assert_eq!(form.category_id, None);
        assert_eq!(form.to_payload(&cats).category, None);
    }

    #[test]
    fn test_payload_is_trimmed() {
        let cats = categories();
        let form = SubcategoryForm {
            name: "  Quesos ".into(),
            description: " Duros  ".into(),
            category_id: Some(2),
        };
        let payload = form.to_payload(&cats);
        assert_eq!(payload.name, "Quesos");
        assert_eq!(payload.description, "Duros");
        assert_eq!(payload.category, Some(cats[1].clone()));
    }

    #[test]
    fn test_unknown_category_is_not_valid() {
        let mut form = SubcategoryForm {
            name: "x".into(),
            description: "y".into(),
            category_id: None,
        };
        form.select_category("42");
        assert_eq!(form.category_id, Some(42));
        assert!(!form.is_valid(&categories()));
    }
}
