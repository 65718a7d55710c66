//! Tab strip shared by the products and projects sections

use super::IconGlyph;
use crate::domain::icon::Icon;
use leptos::prelude::*;

/// One button per record; `scope` ties the buttons to panels tagged
/// `data-tab-panel="{scope}-{index}"`.
#[component]
pub fn TabBar(scope: &'static str, labels: Vec<(Icon, String)>, selected: usize) -> impl IntoView {
    view! {
        <div class="tab-bar" data-tab-scope=scope>
            {labels.into_iter().enumerate().map(|(index, (icon, label))| {
                let class = if index == selected { "active" } else { "" };
                view! {
                    <button type="button" class=class data-tab=format!("{}-{}", scope, index)>
                        <IconGlyph icon=icon />
                        <span class="button-text">{label}</span>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Panel class for record `index` when `selected` is shown.
pub(crate) fn panel_class(index: usize, selected: usize) -> &'static str {
    if index == selected {
        "tab-panel active"
    } else {
        "tab-panel"
    }
}
