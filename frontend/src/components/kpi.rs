use clientdesk_shared::{MonthlyTotal, Tone, format_currency};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::theme::tone_color;

// ===== KPI Card =====

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    #[prop_or_default]
    pub tone: Tone,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div
            class="rounded-lg p-4"
            style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
        >
            <div class="text-sm mb-1" style="color: var(--fg-muted);">{props.title}</div>
            if props.loading {
                <div class="h-8 w-24 rounded animate-pulse" style="background-color: var(--bg-tertiary);"></div>
            } else {
                <div class="text-2xl font-bold font-mono" style={format!("color: {}", tone_color(props.tone))}>
                    {&props.value}
                </div>
            }
            <div class="text-xs mt-1" style="color: var(--fg-dimmed);">{props.subtitle}</div>
        </div>
    }
}

// ===== Bar Chart =====

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub series: Vec<MonthlyTotal>,
}

/// Horizontal bars, one per month, scaled to the largest month.
#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    if props.series.is_empty() {
        return html! {
            <div class="text-center py-8 text-sm" style="color: var(--fg-muted);">{"Sin ventas registradas"}</div>
        };
    }

    let max = props
        .series
        .iter()
        .map(|point| point.total)
        .max()
        .unwrap_or(Decimal::ZERO);

    html! {
        <div class="space-y-3">
            { for props.series.iter().map(|point| html! {
                <div>
                    <div class="flex justify-between text-sm mb-1">
                        <span style="color: var(--fg-secondary);">{&point.label}</span>
                        <span class="font-mono" style="color: var(--fg-primary);">{format_currency(Some(point.total))}</span>
                    </div>
                    <div class="w-full rounded-full h-2" style="background-color: var(--bg-tertiary);">
                        <div
                            class="h-2 rounded-full"
                            style={format!("width: {:.1}%; background-color: var(--accent-primary);", bar_width(point.total, max))}
                        ></div>
                    </div>
                </div>
            }) }
        </div>
    }
}

/// Percentage of `max` covered by `value`, clamped to 0..=100.
pub fn bar_width(value: Decimal, max: Decimal) -> f64 {
    if max <= Decimal::ZERO {
        return 0.0;
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0) * 100.0;
    ratio.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(Decimal::from(50), Decimal::from(200)), 25.0);
        assert_eq!(bar_width(Decimal::from(200), Decimal::from(200)), 100.0);
        assert_eq!(bar_width(Decimal::from(-5), Decimal::from(10)), 0.0);
        assert_eq!(bar_width(Decimal::from(5), Decimal::ZERO), 0.0);
    }
}
