use clientdesk_shared::{format_optional, status_tone};
use yew::prelude::*;

use crate::theme::badge_style;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub value: Option<String>,
}

/// Pill for a status/type value. Unknown values get the neutral tone.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let label = format_optional(props.value.as_deref(), "-");
    let tone = status_tone(&label);

    html! {
        <span class="px-2 py-1 text-xs rounded font-medium" style={badge_style(tone)}>
            {label}
        </span>
    }
}
