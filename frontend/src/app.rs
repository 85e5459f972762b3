use leptos::*;
use leptos_router::*;

use crate::api::SessionStore;
use crate::components::navbar::Navbar;
use crate::i18n::{browser_language, provide_i18n};
use crate::pages::{catalog::CatalogPage, static_page::StaticPage};

#[component]
pub fn App() -> impl IntoView {
    provide_i18n(&browser_language());

    // The store is the only writer of session values; the navbar gets a
    // read-only view of it.
    let session = SessionStore::load();
    provide_context(session);

    view! {
        <Router>
            <Navbar session=session.view() />
            <main class="container">
                <Routes>
                    <Route path="/" view=|| view! { <StaticPage title_key="page.home" /> } />
                    <Route path=shared::CATALOG_ROUTE view=CatalogPage />
                    <Route path="/about" view=|| view! { <StaticPage title_key="page.about" /> } />
                    <Route path="/contact" view=|| view! { <StaticPage title_key="page.contact" /> } />
                    <Route path="/login" view=|| view! { <StaticPage title_key="page.login" /> } />
                    <Route path="/signup" view=|| view! { <StaticPage title_key="page.signup" /> } />
                    <Route path="/dashboard/cart" view=|| view! { <StaticPage title_key="page.cart" /> } />
                    <Route path="/dashboard/my-profile" view=|| view! { <StaticPage title_key="page.profile" /> } />
                </Routes>
            </main>
        </Router>
    }
}
