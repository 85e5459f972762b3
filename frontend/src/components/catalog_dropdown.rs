use leptos::*;

use crate::i18n::use_i18n;
use crate::utils::{link_class, CatalogView, NavEvent, NavLink, NavUiState, PointerKind};

/// Body of an open catalog menu: a placeholder, the category links, or an
/// empty message.
#[component]
pub fn CatalogMenuContent(
    #[prop(into)] catalog: Signal<CatalogView>,
    entry_class: &'static str,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_i18n();

    move || match catalog.get() {
        CatalogView::Loading => view! {
            <p class="catalog-message">{i18n.t("navbar.loading")}</p>
        }
        .into_view(),
        CatalogView::Empty => view! {
            <p class="catalog-message">{i18n.t("navbar.no_courses")}</p>
        }
        .into_view(),
        CatalogView::Entries(entries) => entries
            .into_iter()
            .map(|entry| {
                view! {
                    <a
                        href=entry.href
                        class=entry_class
                        on:click=move |_| {
                            if let Some(callback) = on_navigate {
                                callback.call(());
                            }
                        }
                    >
                        <p>{entry.name}</p>
                    </a>
                }
            })
            .collect_view(),
    }
}

/// Catalog entry of the desktop bar.
///
/// A mouse opens it by hovering. Touch, pen and keyboard users click the
/// trigger instead.
#[component]
pub fn DesktopCatalog(
    link: NavLink,
    ui: RwSignal<NavUiState>,
    #[prop(into)] catalog: Signal<CatalogView>,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let is_open = move || ui.with(|state| state.catalog.is_open());
    // Pointer of the press the next click belongs to.
    let pressed_by = store_value(None::<PointerKind>);

    let pointer_kind = |ev: &ev::PointerEvent| PointerKind::from_pointer_type(&ev.pointer_type());
    let on_enter = move |ev: ev::PointerEvent| {
        ui.update(|state| state.apply(NavEvent::CatalogPointerEnter(pointer_kind(&ev))));
    };
    let on_leave = move |ev: ev::PointerEvent| {
        ui.update(|state| state.apply(NavEvent::CatalogPointerLeave(pointer_kind(&ev))));
    };
    let on_press = move |_: ev::MouseEvent| {
        let pointer = pressed_by.get_value();
        pressed_by.set_value(None);
        ui.update(|state| state.apply(NavEvent::CatalogPressed(pointer)));
    };
    let on_navigate = Callback::new(move |_| ui.update(|state| state.apply(NavEvent::Navigated)));

    view! {
        <div class="catalog-trigger" on:pointerenter=on_enter on:pointerleave=on_leave>
            <button
                class="catalog-toggle"
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:pointerdown=move |ev: ev::PointerEvent| pressed_by.set_value(Some(pointer_kind(&ev)))
                on:click=on_press
            >
                <p class=move || link_class(active.get())>{i18n.t(link.label_key)}</p>
                <span class="chevron" aria-hidden="true">"▾"</span>
            </button>
            <Show when=is_open>
                <div class="catalog-dropdown">
                    <div class="catalog-dropdown-arrow"></div>
                    <CatalogMenuContent
                        catalog=catalog
                        entry_class="catalog-entry"
                        on_navigate=on_navigate
                    />
                </div>
            </Show>
        </div>
    }
}

/// Catalog entry inside the mobile overlay, opened by tapping.
#[component]
pub fn MobileCatalog(
    link: NavLink,
    ui: RwSignal<NavUiState>,
    #[prop(into)] catalog: Signal<CatalogView>,
) -> impl IntoView {
    let i18n = use_i18n();
    let on_navigate = Callback::new(move |_| ui.update(|state| state.apply(NavEvent::Navigated)));

    view! {
        <div class="mobile-catalog">
            <button
                class="mobile-catalog-toggle"
                on:click=move |ev: ev::MouseEvent| {
                    // The overlay closes itself on click.
                    ev.stop_propagation();
                    ui.update(|state| state.apply(NavEvent::CatalogActivated));
                }
            >
                <p>{i18n.t(link.label_key)}</p>
                <span class="chevron" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || ui.with(|state| state.catalog.is_open())>
                <div class="mobile-catalog-dropdown">
                    <CatalogMenuContent
                        catalog=catalog
                        entry_class="mobile-catalog-entry"
                        on_navigate=on_navigate
                    />
                </div>
            </Show>
        </div>
    }
}
