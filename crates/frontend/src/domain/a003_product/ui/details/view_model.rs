use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryId};
use contracts::domain::a003_product::aggregate::{Product, ProductPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_product::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::form_mode::FormMode;
use crate::shared::lifetime::Lifetime;
use crate::shared::list_utils::compare_names;
use crate::shared::modal::{alert, SAVE_FAILED_MESSAGE};

/// Product form; the price is kept as typed until submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub img: String,
    pub subcategory_id: Option<SubcategoryId>,
}

impl ProductForm {
    pub fn from_mode(mode: &FormMode<Product>) -> Self {
        match mode.existing() {
            Some(product) => Self {
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.to_string(),
                img: product.img.clone().unwrap_or_default(),
                subcategory_id: product.subcategory.as_ref().map(|s| s.id),
            },
            None => Self::default(),
        }
    }

    /// Accepts `12.5` and `12,5`; negative or non-finite prices are rejected
    pub fn parse_price(&self) -> Result<f64, String> {
        let raw = self.price.trim().replace(',', ".");
        let price: f64 = raw
            .parse()
            .map_err(|_| format!("\"{}\" is not a valid price", self.price.trim()))?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price must be zero or positive".to_string());
        }
        Ok(price)
    }

    pub fn select_subcategory(&mut self, raw: &str) {
        self.subcategory_id = raw.trim().parse::<SubcategoryId>().ok();
    }

    pub fn resolve_subcategory<'a>(&self, subcategories: &'a [Subcategory]) -> Option<&'a Subcategory> {
        let id = self.subcategory_id?;
        subcategories.iter().find(|s| s.id == id)
    }

    pub fn to_payload(&self, subcategories: &[Subcategory]) -> Result<ProductPayload, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let img = self.img.trim();
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.parse_price()?,
            img: (!img.is_empty()).then(|| img.to_string()),
            subcategory: self.resolve_subcategory(subcategories).cloned(),
        })
    }
}

pub fn subcategory_options(subcategories: &[Subcategory]) -> Vec<Subcategory> {
    let mut options = subcategories.to_vec();
    options.sort_by(|a, b| compare_names(&a.name, &b.name));
    options
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(mode: &FormMode<Product>) -> Self {
        Self {
            form: RwSignal::new(ProductForm::from_mode(mode)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(
        &self,
        api_client: ApiClient,
        mode: FormMode<Product>,
        subcategories: Vec<Subcategory>,
        lifetime: Lifetime,
        on_saved: Callback<()>,
    ) {
        let payload = match self.form.with_untracked(|f| f.to_payload(&subcategories)) {
            Ok(payload) => payload,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        self.error.set(None);
        let saving = self.saving;
        saving.set(true);

        spawn_local(async move {
            let result = match &mode {
                FormMode::Create => api::create(&api_client, &payload).await,
                FormMode::Edit(existing) => api::update(&api_client, existing.id, &payload).await,
            };
            let Some(result) = lifetime.keep("save product", result) else {
                return;
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    log::info!("product '{}' saved", payload.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("saving product failed: {}", e);
                    alert(SAVE_FAILED_MESSAGE);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;

    fn subcategory(id: i64, name: &str) -> Subcategory {
        Subcategory {
            id,
            name: name.to_string(),
            description: String::new(),
            category: Category {
                id: 1,
                name: "Bebidas".into(),
                description: String::new(),
            },
        }
    }

    #[test]
    fn test_price_parsing() {
        let mut form = ProductForm {
            name: "Cola".into(),
            price: "12,5".into(),
            ..Default::default()
        };
        assert_eq!(form.parse_price(), Ok(12.5));

        form.price = "abc".into();
        assert!(form.parse_price().is_err());

        form.price = "-1".into();
        assert!(form.parse_price().is_err());
    }

    #[test]
    fn test_payload_resolves_subcategory_and_image() {
        let subs = vec![subcategory(1, "Gaseosas"), subcategory(2, "Aguas")];
        let mut form = ProductForm {
            name: " Cola ".into(),
            price: "3".into(),
            img: "  ".into(),
            ..Default::default()
        };
        form.select_subcategory("2");

        let payload = form.to_payload(&subs).unwrap();
        assert_eq!(payload.name, "Cola");
        assert_eq!(payload.img, None);
        assert_eq!(payload.subcategory.map(|s| s.name), Some("Aguas".to_string()));
    }

    #[test]
    fn test_edit_prefills_from_product() {
        let product = Product {
            id: 5,
            name: "Cola".into(),
            description: "1.5L".into(),
            price: 2.5,
            img: Some("/img/cola.png".into()),
            subcategory: Some(subcategory(1, "Gaseosas")),
        };
        let form = ProductForm::from_mode(&FormMode::Edit(product));
        assert_eq!(form.price, "2.5");
        assert_eq!(form.img, "/img/cola.png");
        assert_eq!(form.subcategory_id, Some(1));
    }

    #[test]
    fn test_subcategory_options_sorted() {
        let names: Vec<String> = subcategory_options(&[subcategory(1, "b"), subcategory(2, "A")])
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["A", "b"]);
    }
}
