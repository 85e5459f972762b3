//! State behind the top navigation bar.
//!
//! Everything here is plain data so the navbar components only translate
//! DOM events into [`NavEvent`]s and render what these types report.

use std::cell::Cell;
use std::rc::Rc;

use shared::{catalog_path, match_route, Category, User, CATALOG_ROUTE};

/// An entry of the top-level navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    /// Translation key of the visible label.
    pub label_key: &'static str,
    /// `None` for entries that open a menu instead of navigating.
    pub path: Option<&'static str>,
}

impl NavLink {
    pub fn is_catalog(&self) -> bool {
        self.path.is_none()
    }

    /// Whether this entry should be highlighted for the current path.
    pub fn is_active(&self, pathname: &str) -> bool {
        match self.path {
            Some(path) => match_route(path, pathname),
            None => match_route(CATALOG_ROUTE, pathname),
        }
    }
}

pub const NAVBAR_LINKS: [NavLink; 4] = [
    NavLink {
        title: "Home",
        label_key: "nav.home",
        path: Some("/"),
    },
    NavLink {
        title: "Catalog",
        label_key: "nav.catalog",
        path: None,
    },
    NavLink {
        title: "About Us",
        label_key: "nav.about",
        path: Some("/about"),
    },
    NavLink {
        title: "Contact Us",
        label_key: "nav.contact",
        path: Some("/contact"),
    },
];

pub fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

// ============================================================================
// Menu state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parses `PointerEvent.pointerType`. Unknown values are treated as touch,
    /// so they never open menus by hover.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }

    fn hovers(&self) -> bool {
        matches!(self, PointerKind::Mouse)
    }
}

/// Open/closed state of the catalog submenu.
///
/// Hover only counts for a real mouse; touch screens emulate hover on tap,
/// which would otherwise fight with the explicit toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pointer_enter(&mut self, pointer: PointerKind) {
        if pointer.hovers() {
            self.open = true;
        }
    }

    pub fn pointer_leave(&mut self, pointer: PointerKind) {
        if pointer.hovers() {
            self.open = false;
        }
    }

    /// A click on the desktop trigger. `None` means no pointer pressed it,
    /// as with keyboard activation.
    pub fn press(&mut self, pointer: Option<PointerKind>) {
        if !pointer.is_some_and(|pointer| pointer.hovers()) {
            self.toggle();
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    open: bool,
}

impl MobileMenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    MenuButtonPressed,
    OverlayClicked,
    Navigated,
    CatalogPointerEnter(PointerKind),
    CatalogPointerLeave(PointerKind),
    /// Click on the desktop catalog trigger, with the pointer that pressed it.
    CatalogPressed(Option<PointerKind>),
    /// The catalog button inside the mobile overlay. Its DOM handler stops
    /// propagation, so the overlay never sees the same click.
    CatalogActivated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavUiState {
    pub mobile_menu: MobileMenuState,
    pub catalog: DropdownState,
}

impl NavUiState {
    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::MenuButtonPressed => self.mobile_menu.toggle(),
            NavEvent::OverlayClicked => self.mobile_menu.close(),
            NavEvent::Navigated => {
                self.mobile_menu.close();
                self.catalog.close();
            }
            NavEvent::CatalogPointerEnter(pointer) => self.catalog.pointer_enter(pointer),
            NavEvent::CatalogPointerLeave(pointer) => self.catalog.pointer_leave(pointer),
            NavEvent::CatalogPressed(pointer) => self.catalog.press(pointer),
            NavEvent::CatalogActivated => self.catalog.toggle(),
        }
    }
}

// ============================================================================
// Catalog content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub href: String,
}

/// What an open catalog submenu shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Loading,
    Entries(Vec<CatalogEntry>),
    Empty,
}

impl CatalogView {
    pub fn from_state(loading: bool, categories: &[Category]) -> Self {
        if loading {
            return CatalogView::Loading;
        }
        if categories.is_empty() {
            return CatalogView::Empty;
        }
        CatalogView::Entries(
            categories
                .iter()
                .map(|category| CatalogEntry {
                    name: category.name.clone(),
                    href: catalog_path(&category.name),
                })
                .collect(),
        )
    }
}

/// Keeps the categories shown so far when a fetch fails.
pub fn apply_fetch_result<E>(
    current: &mut Vec<Category>,
    result: Result<Vec<Category>, E>,
) -> Option<E> {
    match result {
        Ok(categories) => {
            *current = categories;
            None
        }
        Err(e) => Some(e),
    }
}

// ============================================================================
// Session-dependent actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    /// Item count, only present when there is something in the cart.
    pub count: Option<u32>,
}

/// Which call-to-action controls the navbar shows for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCluster {
    pub cart: Option<CartBadge>,
    pub show_auth_buttons: bool,
    pub show_profile_menu: bool,
}

impl ActionCluster {
    pub fn from_session(token: Option<&str>, user: Option<&User>, total_items: u32) -> Self {
        let cart = user
            .filter(|user| user.account_type.can_use_cart())
            .map(|_| CartBadge {
                count: (total_items > 0).then_some(total_items),
            });

        Self {
            cart,
            show_auth_buttons: token.is_none(),
            show_profile_menu: token.is_some(),
        }
    }
}

// ============================================================================
// Async result guard
// ============================================================================

/// Liveness of a mounted component, checked before async results are applied.
#[derive(Debug, Clone)]
pub struct LivenessFlag(Rc<Cell<bool>>);

impl LivenessFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for LivenessFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AccountType;

    fn user(account_type: AccountType) -> User {
        User {
            id: "u1".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            account_type,
            image: None,
        }
    }

    #[test]
    fn test_navbar_links_has_single_catalog() {
        let catalogs: Vec<_> = NAVBAR_LINKS.iter().filter(|l| l.is_catalog()).collect();
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].title, "Catalog");
    }

    #[test]
    fn test_link_active_state() {
        let home = NAVBAR_LINKS[0];
        let catalog = NAVBAR_LINKS[1];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
        assert!(catalog.is_active("/catalog/web-development"));
        assert!(!catalog.is_active("/catalog"));
        assert_eq!(link_class(true), "nav-link active");
        assert_eq!(link_class(false), "nav-link");
    }

    #[test]
    fn test_dropdown_hover_with_mouse() {
        let mut state = DropdownState::default();
        assert!(!state.is_open());
        state.pointer_enter(PointerKind::Mouse);
        assert!(state.is_open());
        state.pointer_leave(PointerKind::Mouse);
        assert!(!state.is_open());
    }

    #[test]
    fn test_dropdown_ignores_touch_hover() {
        let mut state = DropdownState::default();
        state.pointer_enter(PointerKind::Touch);
        assert!(!state.is_open());

        state.toggle();
        state.pointer_leave(PointerKind::Touch);
        state.pointer_leave(PointerKind::Pen);
        assert!(state.is_open());
    }

    #[test]
    fn test_desktop_trigger_press_by_touch_toggles() {
        let mut state = NavUiState::default();
        state.apply(NavEvent::CatalogPointerEnter(PointerKind::Touch));
        state.apply(NavEvent::CatalogPressed(Some(PointerKind::Touch)));
        assert!(state.catalog.is_open());

        state.apply(NavEvent::CatalogPressed(Some(PointerKind::Pen)));
        assert!(!state.catalog.is_open());

        state.apply(NavEvent::CatalogPressed(None));
        assert!(state.catalog.is_open());
    }

    #[test]
    fn test_desktop_trigger_press_by_mouse_keeps_hover_state() {
        let mut state = NavUiState::default();
        state.apply(NavEvent::CatalogPointerEnter(PointerKind::Mouse));
        state.apply(NavEvent::CatalogPressed(Some(PointerKind::Mouse)));
        assert!(state.catalog.is_open());

        state.apply(NavEvent::CatalogPointerLeave(PointerKind::Mouse));
        assert!(!state.catalog.is_open());
    }

    #[test]
    fn test_pointer_kind_parsing() {
        assert_eq!(PointerKind::from_pointer_type("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_pointer_type("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_pointer_type("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_pointer_type(""), PointerKind::Touch);
    }

    #[test]
    fn test_catalog_toggle_keeps_overlay_open() {
        let mut state = NavUiState::default();
        state.apply(NavEvent::MenuButtonPressed);
        assert!(state.mobile_menu.is_open());

        state.apply(NavEvent::CatalogActivated);
        assert!(state.mobile_menu.is_open());
        assert!(state.catalog.is_open());

        state.apply(NavEvent::CatalogActivated);
        assert!(state.mobile_menu.is_open());
        assert!(!state.catalog.is_open());
    }

    #[test]
    fn test_overlay_click_and_navigation_close_menu() {
        let mut state = NavUiState::default();
        state.apply(NavEvent::MenuButtonPressed);
        state.apply(NavEvent::OverlayClicked);
        assert!(!state.mobile_menu.is_open());

        state.apply(NavEvent::MenuButtonPressed);
        state.apply(NavEvent::CatalogActivated);
        state.apply(NavEvent::Navigated);
        assert_eq!(state, NavUiState::default());
    }

    #[test]
    fn test_catalog_view_rendering_is_stable() {
        let categories = vec![Category::new("Web Development"), Category::new("AI")];
        let first = CatalogView::from_state(false, &categories);
        let second = CatalogView::from_state(false, &categories);
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_view_entries_keep_order() {
        let categories = vec![Category::new("Web Development"), Category::new("AI")];
        assert_eq!(
            CatalogView::from_state(false, &categories),
            CatalogView::Entries(vec![
                CatalogEntry {
                    name: "Web Development".to_string(),
                    href: "/catalog/web-development".to_string(),
                },
                CatalogEntry {
                    name: "AI".to_string(),
                    href: "/catalog/ai".to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_catalog_view_loading_wins() {
        let categories = vec![Category::new("AI")];
        assert_eq!(CatalogView::from_state(true, &categories), CatalogView::Loading);
        assert_eq!(CatalogView::from_state(true, &[]), CatalogView::Loading);
    }

    #[test]
    fn test_empty_fetch_replaces_stale_list() {
        let mut categories = vec![Category::new("AI")];
        let error = apply_fetch_result::<String>(&mut categories, Ok(vec![]));
        assert!(error.is_none());
        assert_eq!(CatalogView::from_state(false, &categories), CatalogView::Empty);
    }

    #[test]
    fn test_failed_first_fetch_renders_like_empty() {
        let mut failed = Vec::new();
        let error = apply_fetch_result(&mut failed, Err("network down".to_string()));
        assert_eq!(error.as_deref(), Some("network down"));

        let mut empty = Vec::new();
        apply_fetch_result::<String>(&mut empty, Ok(vec![]));

        assert_eq!(
            CatalogView::from_state(false, &failed),
            CatalogView::from_state(false, &empty)
        );
    }

    #[test]
    fn test_failed_refetch_keeps_previous_list() {
        let mut categories = vec![Category::new("AI")];
        apply_fetch_result(&mut categories, Err("timeout".to_string()));
        assert_eq!(categories, vec![Category::new("AI")]);
    }

    #[test]
    fn test_cart_hidden_without_user() {
        let cluster = ActionCluster::from_session(Some("t"), None, 3);
        assert!(cluster.cart.is_none());
    }

    #[test]
    fn test_cart_hidden_for_instructor() {
        let instructor = user(AccountType::Instructor);
        let cluster = ActionCluster::from_session(Some("t"), Some(&instructor), 3);
        assert!(cluster.cart.is_none());
    }

    #[test]
    fn test_cart_count_only_when_positive() {
        let student = user(AccountType::Student);
        let empty = ActionCluster::from_session(Some("t"), Some(&student), 0);
        assert_eq!(empty.cart, Some(CartBadge { count: None }));

        let filled = ActionCluster::from_session(Some("t"), Some(&student), 2);
        assert_eq!(filled.cart, Some(CartBadge { count: Some(2) }));
    }

    #[test]
    fn test_auth_buttons_and_profile_are_exclusive() {
        let student = user(AccountType::Student);
        for token in [None, Some("token")] {
            for user in [None, Some(&student)] {
                let cluster = ActionCluster::from_session(token, user, 0);
                assert_ne!(cluster.show_auth_buttons, cluster.show_profile_menu);
                assert_eq!(cluster.show_auth_buttons, token.is_none());
            }
        }
    }

    #[test]
    fn test_anonymous_visitor_with_one_category() {
        let cluster = ActionCluster::from_session(None, None, 0);
        assert!(cluster.show_auth_buttons);
        assert!(!cluster.show_profile_menu);
        assert!(cluster.cart.is_none());

        let mut categories = Vec::new();
        apply_fetch_result::<String>(&mut categories, Ok(vec![Category::new("Web Development")]));

        let mut ui = NavUiState::default();
        ui.apply(NavEvent::CatalogPointerEnter(PointerKind::Mouse));
        assert!(ui.catalog.is_open());

        match CatalogView::from_state(false, &categories) {
            CatalogView::Entries(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].href, "/catalog/web-development");
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_liveness_flag() {
        let flag = LivenessFlag::new();
        let task_copy = flag.clone();
        assert!(task_copy.is_live());
        flag.revoke();
        assert!(!task_copy.is_live());
    }
}
