use leptos::*;
use leptos_router::use_params_map;
use shared::Category;

use crate::api::ApiClient;
use crate::components::loading::Loading;
use crate::i18n::use_i18n;
use crate::utils::LivenessFlag;

/// Whether a response for `requested` may still be shown.
///
/// `latest` is the slug the page currently asks for, or `None` once the page
/// was cleaned up.
fn is_current_request(alive: &LivenessFlag, latest: Option<String>, requested: &str) -> bool {
    alive.is_live() && latest.as_deref() == Some(requested)
}

/// Landing page of a single category, reached from the navbar catalog menu.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();
    let slug = create_memo(move |_| {
        params.with(|p| p.get("catalogName").cloned().unwrap_or_default())
    });

    let category = create_rw_signal(Option::<Category>::None);
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(true);

    let alive = LivenessFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.revoke()
    });

    create_effect(move |_| {
        let requested = slug.get();
        loading.set(true);
        error.set(None);

        let alive = alive.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = ApiClient::get_category(&requested).await;
            if !is_current_request(&alive, slug.try_get_untracked(), &requested) {
                return;
            }
            match result {
                Ok(found) => category.set(Some(found)),
                Err(e) => {
                    logging::warn!("Could not load category {}: {}", requested, e);
                    category.set(None);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <section class="catalog-page">
            {move || {
                if loading.get() {
                    view! { <Loading message=i18n.t("catalog.loading") /> }.into_view()
                } else if let Some(found) = category.get() {
                    view! {
                        <div class="catalog-header">
                            <h1 class="catalog-title">{found.name}</h1>
                            {found
                                .description
                                .map(|text| view! { <p class="catalog-description">{text}</p> })}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="empty-state">
                            <p>{i18n.t("catalog.not_found")}</p>
                            {move || error.get().map(|e| view! { <p class="text-muted">{e}</p> })}
                        </div>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}
