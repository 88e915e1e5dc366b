pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_product;
pub mod a004_cart;
