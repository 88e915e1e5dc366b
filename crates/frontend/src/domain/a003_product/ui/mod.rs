pub mod details;
pub mod grid;
pub mod list;
