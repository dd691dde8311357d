use clientdesk_shared::{
    Transaction, ViewState, distinct_values, filter_records, format_currency, format_date_time,
    format_optional,
};
use yew::prelude::*;

use crate::components::{Column, DataTable, FilterBar, StatusBadge, use_filters};
use crate::fetch::use_fetch;
use crate::services::customers;
use crate::theme::amount_color;

#[derive(Properties, PartialEq)]
pub struct TransactionsTabProps {
    pub client_id: String,
}

#[function_component(TransactionsTab)]
pub fn transactions_tab(props: &TransactionsTabProps) -> Html {
    let transactions = use_fetch("client transactions", props.client_id.clone(), |api, id| async move {
        customers::transactions(&api, &id).await
    });
    let filters = use_filters();

    let all: &[Transaction] = transactions.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &filters.criteria());
    let kinds = distinct_values(all, |t| t.kind.as_deref());
    let state = ViewState::resolve(transactions.loading(), all.len(), visible.len());

    html! {
        <div>
            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar por referencia o descripción..."
                kinds={Some(kinds)}
                kind={(*filters.kind).clone()}
                on_kind={filters.on_kind()}
            />
            <DataTable
                columns={vec![
                    Column::text("Fecha"),
                    Column::text("Tipo"),
                    Column::text("Referencia"),
                    Column::text("Descripción"),
                    Column::text("Estado"),
                    Column::numeric("Monto"),
                    Column::numeric("Saldo"),
                ]}
                {state}
                empty_message="Este cliente no tiene transacciones"
            >
                { for visible.iter().map(|tx| {
                    let amount = tx.amount.unwrap_or_default();
                    html! {
                        <tr style="border-bottom: 1px solid var(--border-primary);">
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_date_time(tx.created_at.as_deref())}</td>
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_optional(tx.kind.as_deref(), "-")}</td>
                            <td class="py-3 px-4 font-mono text-sm" style="color: var(--fg-primary);">{format_optional(tx.reference.as_deref(), "-")}</td>
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_optional(tx.description.as_deref(), "-")}</td>
                            <td class="py-3 px-4"><StatusBadge value={tx.status.clone()} /></td>
                            <td class="py-3 px-4 text-right font-mono"
                                style={format!("color: {};", amount_color(amount.is_sign_negative(), amount.is_zero()))}>
                                {format_currency(tx.amount)}
                            </td>
                            <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-secondary);">{format_currency(tx.balance_after)}</td>
                        </tr>
                    }
                }) }
            </DataTable>
        </div>
    }
}
