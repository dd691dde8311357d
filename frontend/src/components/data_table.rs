// Generic table shell: header row plus the body for the current view state

use clientdesk_shared::ViewState;
use yew::prelude::*;

const SKELETON_ROWS: usize = 5;

#[derive(Clone, PartialEq)]
pub struct Column {
    pub label: &'static str,
    pub numeric: bool,
}

impl Column {
    pub fn text(label: &'static str) -> Self {
        Self { label, numeric: false }
    }

    pub fn numeric(label: &'static str) -> Self {
        Self { label, numeric: true }
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub columns: Vec<Column>,
    pub state: ViewState,
    #[prop_or("No hay registros todavía")]
    pub empty_message: &'static str,
    #[prop_or("Ningún registro coincide con los filtros")]
    pub no_results_message: &'static str,
    /// Body rows, rendered only when the state is populated.
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let span = props.columns.len().max(1).to_string();

    let body = match props.state {
        ViewState::Loading => html! {
            { for (0..SKELETON_ROWS).map(|_| html! { <SkeletonRow columns={props.columns.len()} /> }) }
        },
        ViewState::Empty => html! {
            <tr>
                <td colspan={span.clone()} class="text-center py-12" style="color: var(--fg-muted);">
                    {props.empty_message}
                </td>
            </tr>
        },
        ViewState::NoResults => html! {
            <tr>
                <td colspan={span.clone()} class="text-center py-12" style="color: var(--fg-muted);">
                    {props.no_results_message}
                </td>
            </tr>
        },
        ViewState::Populated => props.children.clone(),
    };

    html! {
        <div class="rounded-lg overflow-hidden" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
            <table class="w-full">
                <thead>
                    <tr style="background-color: var(--bg-tertiary);">
                        { for props.columns.iter().map(|col| html! {
                            <th
                                class={if col.numeric { "text-right py-3 px-4 text-sm font-medium" } else { "text-left py-3 px-4 text-sm font-medium" }}
                                style="color: var(--fg-muted);"
                            >
                                {col.label}
                            </th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkeletonRowProps {
    columns: usize,
}

#[function_component(SkeletonRow)]
fn skeleton_row(props: &SkeletonRowProps) -> Html {
    html! {
        <tr style="border-bottom: 1px solid var(--border-primary);">
            { for (0..props.columns).map(|_| html! {
                <td class="py-3 px-4">
                    <div class="h-4 rounded animate-pulse" style="background-color: var(--bg-tertiary);"></div>
                </td>
            }) }
        </tr>
    }
}
