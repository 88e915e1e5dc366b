//! Wire types shared between the storefront frontend and the catalog backend.

pub mod domain;
pub mod system;
