//! Category form, used both inside the list modal and on the add-category page.

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::{CategoryDetailsViewModel, CategoryForm};
