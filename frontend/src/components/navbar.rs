use leptos::*;
use leptos_router::*;
use shared::Category;

use crate::api::{ApiClient, SessionView};
use crate::components::catalog_dropdown::{DesktopCatalog, MobileCatalog};
use crate::components::profile_dropdown::ProfileDropdown;
use crate::i18n::use_i18n;
use crate::utils::{
    apply_fetch_result, link_class, ActionCluster, CatalogView, LivenessFlag, NavEvent,
    NavUiState, NAVBAR_LINKS,
};

/// Loads the catalog categories once for the lifetime of the calling component.
///
/// A result arriving after the component was cleaned up is dropped.
fn load_categories(sub_links: RwSignal<Vec<Category>>, loading: RwSignal<bool>) {
    let alive = LivenessFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.revoke()
    });

    loading.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        let result = ApiClient::get_all_categories().await;
        if !alive.is_live() {
            logging::log!("Navbar was unmounted before categories arrived");
            return;
        }

        let mut error = None;
        sub_links.update(|links| error = apply_fetch_result(links, result));
        if let Some(e) = error {
            logging::warn!("Could not fetch categories: {}", e);
        }
        loading.set(false);
    });
}

#[component]
pub fn Navbar(session: SessionView) -> impl IntoView {
    let i18n = use_i18n();
    let pathname = use_location().pathname;

    let ui = create_rw_signal(NavUiState::default());
    let sub_links = create_rw_signal(Vec::<Category>::new());
    let loading = create_rw_signal(false);

    load_categories(sub_links, loading);

    let catalog = create_memo(move |_| {
        let loading = loading.get();
        sub_links.with(|links| CatalogView::from_state(loading, links))
    });
    let cluster = create_memo(move |_| {
        let total_items = session.total_items.get();
        session.token.with(|token| {
            session.user.with(|user| {
                ActionCluster::from_session(token.as_deref(), user.as_ref(), total_items)
            })
        })
    });
    let close_navbar = Callback::new(move |_| ui.update(|state| state.apply(NavEvent::Navigated)));

    view! {
        <div class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand" on:click=move |_| close_navbar.call(())>
                    {i18n.t("brand.alt")}
                </a>

                <button
                    class="navbar-menu-toggle"
                    aria-label=i18n.t("navbar.open_menu")
                    on:click=move |_| ui.update(|state| state.apply(NavEvent::MenuButtonPressed))
                >
                    "☰"
                </button>

                <nav class="navbar-links">
                    <ul>
                        {NAVBAR_LINKS
                            .iter()
                            .copied()
                            .map(|link| {
                                let active = Signal::derive(move || pathname.with(|path| link.is_active(path)));
                                let item = match link.path {
                                    None => view! {
                                        <DesktopCatalog link=link ui=ui catalog=catalog active=active />
                                    }
                                    .into_view(),
                                    Some(path) => view! {
                                        <a href=path>
                                            <p class=move || link_class(active.get())>{i18n.t(link.label_key)}</p>
                                        </a>
                                    }
                                    .into_view(),
                                };
                                view! { <li>{item}</li> }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="navbar-actions">
                    <NavActions cluster=cluster user=session.user />
                </div>

                <Show when=move || ui.with(|state| state.mobile_menu.is_open())>
                    <div
                        class="mobile-overlay"
                        on:click=move |_| ui.update(|state| state.apply(NavEvent::OverlayClicked))
                    >
                        <div class="mobile-links">
                            {NAVBAR_LINKS
                                .iter()
                                .copied()
                                .map(|link| match link.path {
                                    None => view! { <MobileCatalog link=link ui=ui catalog=catalog /> }.into_view(),
                                    Some(path) => view! {
                                        <a href=path on:click=move |_| close_navbar.call(())>
                                            <p>{i18n.t(link.label_key)}</p>
                                        </a>
                                    }
                                    .into_view(),
                                })
                                .collect_view()}
                            <NavActions cluster=cluster user=session.user close_navbar=close_navbar />
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Cart indicator, log in / sign up buttons, and the profile menu.
///
/// Inside the mobile overlay `close_navbar` is set; the profile menu is then
/// shielded from the overlay's click handler.
#[component]
fn NavActions(
    #[prop(into)] cluster: Signal<ActionCluster>,
    #[prop(into)] user: Signal<Option<shared::User>>,
    #[prop(optional)] close_navbar: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let navigated = move || {
        if let Some(callback) = close_navbar {
            callback.call(());
        }
    };

    view! {
        <div class="nav-actions">
            {move || {
                cluster.get().cart.map(|badge| {
                    view! {
                        <a href="/dashboard/cart" class="cart-link" aria-label=i18n.t("navbar.cart") on:click=move |_| navigated()>
                            <span class="cart-icon" aria-hidden="true">"🛒"</span>
                            {badge.count.map(|count| view! { <span class="cart-count">{count}</span> })}
                        </a>
                    }
                })
            }}
            <Show when=move || cluster.get().show_auth_buttons>
                <a href="/login" on:click=move |_| navigated()>
                    <button class="btn btn-outline">{i18n.t("navbar.log_in")}</button>
                </a>
                <a href="/signup" on:click=move |_| navigated()>
                    <button class="btn btn-outline">{i18n.t("navbar.sign_up")}</button>
                </a>
            </Show>
            <Show when=move || cluster.get().show_profile_menu>
                {match close_navbar {
                    Some(close_navbar) => view! {
                        <div on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                            <ProfileDropdown user=user close_navbar=close_navbar />
                        </div>
                    }
                    .into_view(),
                    None => view! { <ProfileDropdown user=user /> }.into_view(),
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SessionStore;
    use crate::i18n::provide_i18n;
    use shared::{AccountType, User};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn student() -> User {
        User {
            id: "42".to_string(),
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            email: "alan@example.com".to_string(),
            account_type: AccountType::Student,
            image: None,
        }
    }

    fn render_actions(token: Option<&'static str>, user: Option<User>, total_items: u32) -> String {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        let parent: web_sys::HtmlElement = container.clone().unchecked_into();

        mount_to(parent, move || {
            provide_i18n("en");
            provide_context(SessionStore::load());
            let cluster = ActionCluster::from_session(token, user.as_ref(), total_items);
            let user = Signal::derive(move || user.clone());
            view! {
                <Router>
                    <NavActions cluster=Signal::derive(move || cluster) user=user />
                </Router>
            }
        });

        container.inner_html()
    }

    #[wasm_bindgen_test]
    fn test_anonymous_visitor_sees_auth_buttons_only() {
        let html = render_actions(None, None, 0);
        assert!(html.contains("Log in"));
        assert!(html.contains("Sign up"));
        assert!(!html.contains("cart-link"));
        assert!(!html.contains("profile-dropdown"));
    }

    #[wasm_bindgen_test]
    fn test_signed_in_student_sees_cart_and_profile() {
        let html = render_actions(Some("token"), Some(student()), 3);
        assert!(html.contains("cart-link"));
        assert!(html.contains("cart-count"));
        assert!(html.contains(">3<"));
        assert!(html.contains("profile-dropdown"));
        assert!(!html.contains("Log in"));
    }

    #[wasm_bindgen_test]
    fn test_empty_cart_hides_count() {
        let html = render_actions(Some("token"), Some(student()), 0);
        assert!(html.contains("cart-link"));
        assert!(!html.contains("cart-count"));
    }

    #[wasm_bindgen_test]
    fn test_instructor_has_no_cart() {
        let mut instructor = student();
        instructor.account_type = AccountType::Instructor;
        let html = render_actions(Some("token"), Some(instructor), 5);
        assert!(!html.contains("cart-link"));
        assert!(html.contains("profile-dropdown"));
    }

    /// Mounts the whole navbar for a visitor without a session.
    fn mount_navbar() -> web_sys::Element {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::clear();
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        // Delegated handlers only see clicks inside the document.
        document.body().unwrap().append_child(&container).unwrap();

        mount_to(container.clone().unchecked_into(), || {
            provide_i18n("en");
            let session = SessionStore::load();
            provide_context(session);
            view! {
                <Router>
                    <Navbar session=session.view() />
                </Router>
            }
        });
        container
    }

    fn click(container: &web_sys::Element, selector: &str) {
        let target: web_sys::HtmlElement = container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into();
        target.click();
    }

    fn has(container: &web_sys::Element, selector: &str) -> bool {
        container.query_selector(selector).unwrap().is_some()
    }

    #[wasm_bindgen_test]
    fn test_navbar_for_anonymous_visitor() {
        let container = mount_navbar();
        let html = container.inner_html();
        assert!(html.contains("Home"));
        assert!(html.contains("Catalog"));
        assert!(html.contains("About Us"));
        assert!(html.contains("Contact Us"));
        assert!(html.contains("Log in"));
        assert!(html.contains("Sign up"));
        assert!(!has(&container, ".cart-link"));
        assert!(!has(&container, ".profile-dropdown"));
        assert!(!has(&container, ".mobile-overlay"));

        // The category request is still in flight.
        click(&container, ".catalog-toggle");
        assert!(has(&container, ".catalog-dropdown"));
        assert!(container.inner_html().contains("Loading..."));
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_mobile_catalog_toggle_keeps_overlay_open() {
        let container = mount_navbar();
        click(&container, ".navbar-menu-toggle");
        assert!(has(&container, ".mobile-overlay"));

        click(&container, ".mobile-catalog-toggle");
        assert!(has(&container, ".mobile-overlay"));
        assert!(has(&container, ".mobile-catalog-dropdown"));

        click(&container, ".mobile-catalog-toggle");
        assert!(has(&container, ".mobile-overlay"));
        assert!(!has(&container, ".mobile-catalog-dropdown"));

        click(&container, ".mobile-overlay");
        assert!(!has(&container, ".mobile-overlay"));
        container.remove();
    }
}
