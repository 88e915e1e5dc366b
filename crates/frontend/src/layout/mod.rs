//! Persistent chrome wrapped around routed pages.
//!
//! ```text
//! Admin:                          Storefront:
//! +----------------------------+  +----------------------------+
//! |          TopHeader         |  |        NavbarClient        |
//! +---------+------------------+  +----------------------------+
//! | Sidebar |     <Outlet/>    |  |  CategoryMenu (collapsible)|
//! |         |                  |  |         <Outlet/>          |
//! +---------+------------------+  |        FooterClient        |
//!                                 +----------------------------+
//! ```

pub mod admin;
pub mod client;
