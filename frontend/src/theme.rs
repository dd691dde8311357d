// Clientdesk - tone palette
// Maps rendering-agnostic tones onto the CSS variables defined in /static/themes.css

use clientdesk_shared::Tone;

pub fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "var(--color-success)",
        Tone::Warning => "var(--color-warning)",
        Tone::Danger => "var(--color-error)",
        Tone::Info => "var(--accent-primary)",
        Tone::Neutral => "var(--fg-muted)",
    }
}

/// Inline style for a pill badge: tinted background, solid text.
pub fn badge_style(tone: Tone) -> String {
    let color = tone_color(tone);
    format!(
        "background-color: color-mix(in srgb, {} 15%, transparent); color: {}",
        color, color
    )
}

/// Text color for signed money: credits green, debits red, zero muted.
pub fn amount_color(negative: bool, zero: bool) -> &'static str {
    match (negative, zero) {
        (_, true) => tone_color(Tone::Neutral),
        (true, false) => tone_color(Tone::Danger),
        (false, false) => tone_color(Tone::Success),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_a_color() {
        for tone in [Tone::Success, Tone::Warning, Tone::Danger, Tone::Info, Tone::Neutral] {
            assert!(tone_color(tone).starts_with("var(--"));
        }
    }

    #[test]
    fn test_badge_uses_tone_color() {
        let style = badge_style(Tone::Danger);

        assert!(style.contains("var(--color-error)"));
        assert!(style.starts_with("background-color"));
    }

    #[test]
    fn test_amount_color() {
        assert_eq!(amount_color(true, false), "var(--color-error)");
        assert_eq!(amount_color(false, false), "var(--color-success)");
        assert_eq!(amount_color(true, true), "var(--fg-muted)");
    }
}
