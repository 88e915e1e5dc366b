use contracts::domain::a001_category::aggregate::{Category, CategoryPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;
use crate::shared::modal::{alert, SAVE_FAILED_MESSAGE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn from_mode(mode: &FormMode<Category>) -> Self {
        match mode.existing() {
            Some(category) => Self {
                name: category.name.clone(),
                description: category.description.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryForm>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(mode: &FormMode<Category>) -> Self {
        Self {
            form: RwSignal::new(CategoryForm::from_mode(mode)),
            saving: RwSignal::new(false),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.saving.get() && self.form.with(CategoryForm::is_valid)
    }

    /// Sends the form. On failure an alert is shown and the form stays open.
    pub fn save_command(
        &self,
        api_client: ApiClient,
        mode: FormMode<Category>,
        lifetime: Lifetime,
        on_saved: Callback<()>,
    ) {
        let payload = self.form.get_untracked().to_payload();
        let saving = self.saving;
        saving.set(true);

        spawn_local(async move {
            let result = match &mode {
                FormMode::Create => api::create(&api_client, &payload).await,
                FormMode::Edit(existing) => api::update(&api_client, existing.id, &payload).await,
            };
            let Some(result) = lifetime.keep("save category", result) else {
                return;
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    log::info!("category '{}' saved", payload.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("saving category failed: {}", e);
                    alert(SAVE_FAILED_MESSAGE);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_mode_prefills() {
        let existing = Category {
            id: 4,
            name: "Bebidas".into(),
            description: "Frías".into(),
        };
        let form = CategoryForm::from_mode(&FormMode::Edit(existing));
        assert_eq!(form.name, "Bebidas");
        assert_eq!(form.description, "Frías");
        assert!(form.is_valid());
    }

    #[test]
    fn test_create_mode_is_empty() {
        let form = CategoryForm::from_mode(&FormMode::Create);
        assert_eq!(form, CategoryForm::default());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_payload_is_trimmed() {
        let form = CategoryForm {
            name: "  Snacks ".into(),
            description: "Salados ".into(),
        };
        assert_eq!(
            form.to_payload(),
            CategoryPayload {
                name: "Snacks".into(),
                description: "Salados".into()
            }
        );
    }
}
