use leptos::*;
use leptos_router::use_navigate;
use shared::User;

use crate::api::SessionStore;
use crate::i18n::use_i18n;

fn initials(user: &User) -> String {
    user.first_name
        .chars()
        .next()
        .into_iter()
        .chain(user.last_name.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Avatar button with the account menu.
///
/// `close_navbar` is invoked after every navigation so an enclosing mobile
/// overlay can close.
#[component]
pub fn ProfileDropdown(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(optional)] close_navbar: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let is_open = create_rw_signal(false);

    let after_navigation = move || {
        is_open.set(false);
        if let Some(callback) = close_navbar {
            callback.call(());
        }
    };

    let on_logout = move |_| {
        session.logout();
        after_navigation();
        navigate("/", Default::default());
    };

    view! {
        <div class="profile-dropdown">
            <button
                class="profile-trigger"
                title=move || user.with(|u| u.as_ref().map(User::display_name).unwrap_or_default())
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || match user.get() {
                    Some(ref u) if u.image.is_some() => view! {
                        <img class="profile-avatar" src=u.image.clone() alt=u.display_name() />
                    }
                    .into_view(),
                    Some(ref u) => view! { <span class="profile-initials">{initials(u)}</span> }.into_view(),
                    None => view! { <span class="profile-initials">"?"</span> }.into_view(),
                }}
            </button>
            <Show when=move || is_open.get()>
                <div class="profile-menu">
                    <a href="/dashboard/my-profile" class="profile-menu-item" on:click=move |_| after_navigation()>
                        {i18n.t("navbar.dashboard")}
                    </a>
                    <button class="profile-menu-item" on:click=on_logout.clone()>
                        {i18n.t("navbar.log_out")}
                    </button>
                </div>
            </Show>
        </div>
    }
}
