//! Icon glyphs resolved from the closed [`Icon`] set.

use crate::domain::icon::Icon;
use leptos::prelude::*;

/// Renders one icon as a glyph span, e.g. `<span class="icon icon-map-pin">`.
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <span class=icon.css_class() data-icon=icon.name() aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
