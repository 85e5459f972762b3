use leptos::*;

/// Spinner with an optional caption underneath.
#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            {message.map(|text| view! { <p class="loading-message">{text}</p> })}
        </div>
    }
}
