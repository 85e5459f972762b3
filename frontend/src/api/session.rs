use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const TOTAL_ITEMS_KEY: &str = "totalItems";

/// Read-only view of the session handed to components that only display it.
///
/// Each field is a signal, so reading it inside a view subscribes the view
/// to later changes.
#[derive(Clone, Copy)]
pub struct SessionView {
    pub token: Signal<Option<String>>,
    pub user: Signal<Option<User>>,
    pub total_items: Signal<u32>,
}

/// Owner of the session values, persisted in local storage.
#[derive(Clone, Copy)]
pub struct SessionStore {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
    total_items: RwSignal<u32>,
}

impl SessionStore {
    pub fn load() -> Self {
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let user: Option<User> = LocalStorage::get(USER_KEY).ok();
        let total_items: u32 = LocalStorage::get(TOTAL_ITEMS_KEY).unwrap_or(0);

        Self {
            token: create_rw_signal(token),
            user: create_rw_signal(user),
            total_items: create_rw_signal(total_items),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            token: self.token.into(),
            user: self.user.into(),
            total_items: self.total_items.into(),
        }
    }

    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        LocalStorage::delete(TOTAL_ITEMS_KEY);
        self.token.set(None);
        self.user.set(None);
        self.total_items.set(0);
    }
}
