// Orders Page - every order across clients, filtered and paginated locally

use clientdesk_shared::{
    Order, OrderKpis, Tone, ViewState, distinct_values, filter_records, format_count,
    format_currency, format_date, format_optional,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    Column, DataTable, FilterBar, KpiCard, Pagination, Route, StatusBadge, page_range, use_filters,
};
use crate::fetch::{use_config, use_fetch};
use crate::services::orders;

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let config = use_config();
    let fetched = use_fetch("orders", (), |api, _| async move { orders::list(&api).await });
    let filters = use_filters();
    let page = use_state(|| 0usize);

    let criteria = filters.criteria();

    // A new filter always starts from the first page.
    {
        let page = page.clone();
        use_effect_with(criteria.clone(), move |_| {
            page.set(0);
        });
    }

    let all: &[Order] = fetched.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &criteria);
    let kinds = distinct_values(all, |o| o.kind.as_deref());
    let statuses = distinct_values(all, |o| o.status.as_deref());
    let state = ViewState::resolve(fetched.loading(), all.len(), visible.len());

    let range = page_range(visible.len(), *page, config.page_size);
    let kpis = OrderKpis::from_orders(visible.iter().copied());
    let loading = state.is_loading();
    let scope = if criteria.is_match_all() { "Todos los pedidos" } else { "Con los filtros actuales" };

    let on_page = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    html! {
        <div class="p-6">
            <div class="mb-6">
                <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">{"Pedidos"}</h1>
                <p class="mt-1" style="color: var(--fg-muted);">{"Historial de pedidos de todos los clientes"}</p>
            </div>

            if let Some(err) = fetched.error() {
                <div class="mb-4 px-4 py-3 rounded-lg text-sm" style="color: var(--color-error); border: 1px solid var(--color-error);">
                    {format!("No se pudieron cargar los pedidos: {}", err)}
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
                <KpiCard title="Pedidos" value={format_count(kpis.order_count as i64)} subtitle={scope} {loading} />
                <KpiCard title="Ingresos" value={format_currency(Some(kpis.revenue))} subtitle="Suma de totales" tone={Tone::Success} {loading} />
                <KpiCard title="Ticket promedio" value={format_currency(Some(kpis.average_order_value))} subtitle="Por pedido" tone={Tone::Info} {loading} />
                <KpiCard title="Pendientes" value={format_count(kpis.pending_count as i64)} subtitle="Sin completar" tone={Tone::Warning} {loading} />
            </div>

            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar por número, cliente o tipo..."
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
                    Column::text("Cliente"),
                    Column::text("Tipo"),
                    Column::text("Estado"),
                    Column::text("Fecha"),
                    Column::numeric("Subtotal"),
                    Column::numeric("Total"),
                ]}
                {state}
                empty_message="Todavía no hay pedidos"
            >
                { for visible[range].iter().map(|order| html! {
                    <tr style="border-bottom: 1px solid var(--border-primary);">
                        <td class="py-3 px-4 font-mono" style="color: var(--accent-primary);">{format_optional(Some(order.number.as_str()), "-")}</td>
                        <td class="py-3 px-4">
                            if let Some(client_id) = &order.client_id {
                                <Link<Route> to={Route::ClientDetail { id: client_id.to_string() }}>
                                    <span style="color: var(--fg-primary);">{format_optional(order.client_name.as_deref(), "-")}</span>
                                </Link<Route>>
                            } else {
                                <span style="color: var(--fg-primary);">{format_optional(order.client_name.as_deref(), "-")}</span>
                            }
                        </td>
                        <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_optional(order.kind.as_deref(), "-")}</td>
                        <td class="py-3 px-4"><StatusBadge value={order.status.clone()} /></td>
                        <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_date(order.created_at.as_deref())}</td>
                        <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-secondary);">{format_currency(order.subtotal)}</td>
                        <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-primary);">{format_currency(order.total)}</td>
                    </tr>
                }) }
            </DataTable>

            if state == ViewState::Populated {
                <Pagination page={*page} total={visible.len()} page_size={config.page_size} {on_page} />
            }
        </div>
    }
}
