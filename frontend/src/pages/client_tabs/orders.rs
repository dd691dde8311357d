use clientdesk_shared::{
    Order, ViewState, distinct_values, filter_records, format_currency, format_date, format_optional,
};
use yew::prelude::*;

use crate::components::{Column, DataTable, FilterBar, StatusBadge, use_filters};
use crate::fetch::use_fetch;
use crate::services::customers;

#[derive(Properties, PartialEq)]
pub struct OrdersTabProps {
    pub client_id: String,
}

#[function_component(OrdersTab)]
pub fn orders_tab(props: &OrdersTabProps) -> Html {
    let orders = use_fetch("client orders", props.client_id.clone(), |api, id| async move {
        customers::orders(&api, &id).await
    });
    let filters = use_filters();

    let all: &[Order] = orders.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &filters.criteria());
    let kinds = distinct_values(all, |o| o.kind.as_deref());
    let statuses = distinct_values(all, |o| o.status.as_deref());
    let state = ViewState::resolve(orders.loading(), all.len(), visible.len());

    html! {
        <div>
            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar pedido..."
                kinds={Some(kinds)}
                kind={(*filters.kind).clone()}
                on_kind={filters.on_kind()}
                statuses={Some(statuses)}
                status={(*filters.status).clone()}
                on_status={filters.on_status()}
            />
            <DataTable
                columns={vec![
                    Column::text("Pedido"),
                    Column::text("Tipo"),
                    Column::text("Estado"),
                    Column::text("Fecha"),
                    Column::numeric("Subtotal"),
                    Column::numeric("Impuestos"),
                    Column::numeric("Total"),
                ]}
                {state}
                empty_message="Este cliente no tiene pedidos"
            >
                { for visible.iter().map(|order| html! {
                    <tr style="border-bottom: 1px solid var(--border-primary);">
                        <td class="py-3 px-4 font-mono" style="color: var(--accent-primary);">{format_optional(Some(order.number.as_str()), "-")}</td>
                        <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_optional(order.kind.as_deref(), "-")}</td>
                        <td class="py-3 px-4"><StatusBadge value={order.status.clone()} /></td>
                        <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_date(order.created_at.as_deref())}</td>
                        <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-secondary);">{format_currency(order.subtotal)}</td>
                        <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-secondary);">{format_currency(order.tax)}</td>
                        <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-primary);">{format_currency(order.total)}</td>
                    </tr>
                }) }
            </DataTable>
        </div>
    }
}
