//! Loading indicators.

use leptos::prelude::*;

/// Inline spinner with an optional caption.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner">
            <span class="spinner__wheel" aria-hidden="true"></span>
            {label.map(|text| view! { <span class="spinner__label">{text}</span> })}
        </div>
    }
}

/// Full-screen placeholder shown while the startup session check runs.
#[component]
pub fn BootScreen() -> impl IntoView {
    view! {
        <div class="boot-screen">
            <span class="boot-screen__logo" aria-hidden="true">"⚕"</span>
            <span class="boot-screen__label">"LOADING MEDCORE"</span>
        </div>
    }
}
