use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{path, StaticSegment};

use crate::dashboards::d001_catalog_summary::CatalogSummaryDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a001_category::ui::page::AddCategoryPage;
use crate::domain::a002_subcategory::ui::list::SubcategoryList;
use crate::domain::a003_product::ui::grid::ProductGrid;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_cart::ui::cart_page::CartPage;
use crate::layout::admin::AdminLayout;
use crate::layout::client::ClientLayout;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

/// Layout wrapped around a routed page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    Admin,
    Storefront,
    Bare,
}

/// Every page the application can show.
///
/// Admin and storefront trees share the root prefix. No route checks the
/// session: admin pages are reachable by URL without signing in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Products,
    Categories,
    Subcategories,
    AddCategory,
    Home,
    Cart,
    Login,
    Register,
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Dashboard,
        AppRoute::Products,
        AppRoute::Categories,
        AppRoute::Subcategories,
        AppRoute::AddCategory,
        AppRoute::Home,
        AppRoute::Cart,
        AppRoute::Login,
        AppRoute::Register,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Products => "/products",
            AppRoute::Categories => "/categories",
            AppRoute::Subcategories => "/subcategories",
            AppRoute::AddCategory => "/add-category",
            AppRoute::Home => "/home",
            AppRoute::Cart => "/cart",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
        }
    }

    /// Resolves a location path; query string and trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        if path == "/" {
            return Some(AppRoute::Home);
        }
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn chrome(self) -> Chrome {
        match self {
            AppRoute::Dashboard
            | AppRoute::Products
            | AppRoute::Categories
            | AppRoute::Subcategories
            | AppRoute::AddCategory => Chrome::Admin,
            AppRoute::Home | AppRoute::Cart => Chrome::Storefront,
            AppRoute::Login | AppRoute::Register => Chrome::Bare,
        }
    }

    /// Router segment of the page, the path without its leading slash
    pub fn segments(self) -> (StaticSegment<&'static str>,) {
        (StaticSegment(self.path().trim_start_matches('/')),)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Products => "Products",
            AppRoute::Categories => "Categories",
            AppRoute::Subcategories => "Subcategories",
            AppRoute::AddCategory => "Add category",
            AppRoute::Home => "Home",
            AppRoute::Cart => "Cart",
            AppRoute::Login => "Sign in",
            AppRoute::Register => "Register",
        }
    }
}

/// Builds the page groups and the router tree from one list per chrome.
macro_rules! app_routes {
    (
        bare: [$($bare:ident => $bare_view:ident),* $(,)?],
        admin: [$($admin:ident => $admin_view:ident),* $(,)?],
        storefront: [$($store:ident => $store_view:ident),* $(,)?] $(,)?
    ) => {
        /// Pages mounted without chrome
        pub const BARE_PAGES: &[AppRoute] = &[$(AppRoute::$bare),*];
        /// Pages mounted under [`AdminLayout`], in router order
        pub const ADMIN_PAGES: &[AppRoute] = &[$(AppRoute::$admin),*];
        /// Pages mounted under [`ClientLayout`], in router order
        pub const STOREFRONT_PAGES: &[AppRoute] = &[$(AppRoute::$store),*];

        #[component]
        pub fn AppRoutes() -> impl IntoView {
            view! {
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("") view=|| view! { <Redirect path=AppRoute::Home.path() /> } />
                        $(<Route path=AppRoute::$bare.segments() view=$bare_view />)*

                        <ParentRoute path=path!("") view=AdminLayout>
                            $(<Route path=AppRoute::$admin.segments() view=$admin_view />)*
                        </ParentRoute>

                        <ParentRoute path=path!("") view=ClientLayout>
                            $(<Route path=AppRoute::$store.segments() view=$store_view />)*
                        </ParentRoute>
                    </Routes>
                </Router>
            }
        }
    };
}

app_routes! {
    bare: [
        Login => LoginPage,
        Register => RegisterPage,
    ],
    admin: [
        Dashboard => CatalogSummaryDashboard,
        Products => ProductList,
        Categories => CategoryList,
        Subcategories => SubcategoryList,
        AddCategory => AddCategoryPage,
    ],
    storefront: [
        Home => ProductGrid,
        Cart => CartPage,
    ],
}

/// Routes of one chrome in declaration order
pub fn routes_with_chrome(chrome: Chrome) -> impl Iterator<Item = AppRoute> {
    AppRoute::ALL.into_iter().filter(move |r| r.chrome() == chrome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_and_storefront_chrome() {
        assert_eq!(AppRoute::from_path("/subcategories").map(AppRoute::chrome), Some(Chrome::Admin));
        assert_eq!(AppRoute::from_path("/products").map(AppRoute::chrome), Some(Chrome::Admin));
        assert_eq!(AppRoute::from_path("/home").map(AppRoute::chrome), Some(Chrome::Storefront));
        assert_eq!(AppRoute::from_path("/login").map(AppRoute::chrome), Some(Chrome::Bare));
    }

    #[test]
    fn test_router_groups_follow_chrome() {
        let admin: Vec<AppRoute> = routes_with_chrome(Chrome::Admin).collect();
        let storefront: Vec<AppRoute> = routes_with_chrome(Chrome::Storefront).collect();
        let bare: Vec<AppRoute> = routes_with_chrome(Chrome::Bare).collect();

        assert_eq!(ADMIN_PAGES, admin.as_slice());
        assert_eq!(STOREFRONT_PAGES, storefront.as_slice());
        assert_eq!(BARE_PAGES, bare.as_slice());
        assert!(ADMIN_PAGES.contains(&AppRoute::Products));
        assert!(ADMIN_PAGES.contains(&AppRoute::Subcategories));
        assert!(STOREFRONT_PAGES.contains(&AppRoute::Home));
    }

    #[test]
    fn test_every_route_is_mounted_once() {
        for route in AppRoute::ALL {
            let mounts = [BARE_PAGES, ADMIN_PAGES, STOREFRONT_PAGES]
                .iter()
                .filter(|group| group.contains(&route))
                .count();
            assert_eq!(mounts, 1, "{:?}", route);
        }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/home?subcategory=3"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/categories/"), Some(AppRoute::Categories));
        assert_eq!(AppRoute::from_path("/admin"), None);
    }
}
