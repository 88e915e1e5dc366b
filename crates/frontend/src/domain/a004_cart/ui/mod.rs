pub mod cart_item;
pub mod cart_page;
