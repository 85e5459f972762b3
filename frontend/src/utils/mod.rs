pub mod navigation;

pub use navigation::{
    apply_fetch_result, link_class, ActionCluster, CartBadge, CatalogEntry, CatalogView,
    LivenessFlag, NavEvent, NavLink, NavUiState, PointerKind, NAVBAR_LINKS,
};
