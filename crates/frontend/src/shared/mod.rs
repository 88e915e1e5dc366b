pub mod api_utils;
pub mod components;
pub mod config;
pub mod form_mode;
pub mod format;
pub mod icons;
pub mod lifetime;
pub mod list_utils;
pub mod modal;
