//! Subcategory add/edit form shown in a modal
//!
//! - view_model.rs: form state, category options and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SubcategoryDetails;
pub use view_model::{category_options, SubcategoryDetailsViewModel, SubcategoryForm};
