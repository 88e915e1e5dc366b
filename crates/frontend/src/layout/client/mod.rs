pub mod category_menu;
pub mod footer;
pub mod navbar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use category_menu::CategoryMenu;
use footer::FooterClient;
use navbar::NavbarClient;

fn menu_class(open: bool) -> &'static str {
    if open {
        "client-layout__menu client-layout__menu--open"
    } else {
        "client-layout__menu"
    }
}

#[component]
pub fn ClientLayout() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <div class="client-layout" data-chrome="storefront">
            <NavbarClient menu_open=menu_open />
            // mounted once; toggling only changes the class
            <div class=move || menu_class(menu_open.get()) hidden=move || !menu_open.get()>
                <CategoryMenu />
            </div>
            <main class="client-layout__content">
                <Outlet />
            </main>
            <FooterClient />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_class_follows_toggle() {
        assert_eq!(menu_class(false), "client-layout__menu");
        assert!(menu_class(true).ends_with("client-layout__menu--open"));
    }
}
