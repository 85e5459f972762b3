use leptos::*;

use crate::i18n::use_i18n;

/// Page that only shows a translated heading.
///
/// Stands in for the login, sign-up, cart and profile screens, which are
/// served by other parts of the platform.
#[component]
pub fn StaticPage(title_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="static-page">
            <h1>{i18n.t(title_key)}</h1>
        </section>
    }
}
