// Dashboard - KPIs, alerts, revenue chart and top lists

use clientdesk_shared::{
    Alert, Client, DashboardStats, Order, OrderKpis, Tone, ViewState, format_count,
    format_currency, format_date, format_optional, monthly_revenue, status_tone,
    top_clients_by_balance, top_n,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Column, DataTable, KpiCard, RevenueChart, Route, StatusBadge};
use crate::fetch::{settle, use_fetch};
use crate::services::{customers, dashboard, orders, ApiClient, ApiResult};
use crate::theme::tone_color;

const TOP_ORDERS: usize = 5;
const TOP_CLIENTS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    stats: Option<DashboardStats>,
    alerts: Vec<Alert>,
    orders: Vec<Order>,
    clients: Vec<Client>,
}

// The four collections are independent; one failing leaves the others on screen.
async fn load_dashboard(api: ApiClient, _: ()) -> ApiResult<DashboardData> {
    let (stats, alerts, orders, clients) = futures::join!(
        dashboard::stats(&api),
        dashboard::alerts(&api),
        orders::list(&api),
        customers::list(&api),
    );

    Ok(DashboardData {
        stats: settle("dashboard stats", stats),
        alerts: settle("dashboard alerts", alerts).unwrap_or_default(),
        orders: settle("dashboard orders", orders).unwrap_or_default(),
        clients: settle("dashboard clients", clients).unwrap_or_default(),
    })
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let data = use_fetch("dashboard", (), load_dashboard);
    let loading = data.loading();
    let snapshot = data.data().cloned().unwrap_or_default();

    let stats = snapshot.stats.clone().unwrap_or_default();
    let order_kpis = OrderKpis::from_orders(&snapshot.orders);
    let series = monthly_revenue(&snapshot.orders);
    let top_orders = top_n(&snapshot.orders, |o| o.total, TOP_ORDERS);
    let top_clients = top_clients_by_balance(&snapshot.clients, TOP_CLIENTS);

    let on_refresh = data.reload().reform(|_: MouseEvent| ());

    html! {
        <div class="p-6 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">{"Resumen"}</h1>
                    <p class="mt-1" style="color: var(--fg-muted);">{"Estado general de clientes y facturación"}</p>
                </div>
                <button
                    onclick={on_refresh}
                    class="px-4 py-2 rounded-lg font-medium"
                    style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                >
                    {"Actualizar"}
                </button>
            </div>

            if !loading && snapshot.stats.is_none() {
                <div class="px-4 py-3 rounded-lg text-sm" style={format!("color: {}; border: 1px solid {};", tone_color(Tone::Danger), tone_color(Tone::Danger))}>
                    {"No se pudieron cargar las estadísticas. Los demás datos siguen disponibles."}
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-4">
                <KpiCard title="Clientes" value={format_count(stats.total_clients)} subtitle="Registrados" {loading} />
                <KpiCard title="Activos" value={format_count(stats.active_clients)} subtitle="Con actividad" tone={Tone::Success} {loading} />
                <KpiCard title="Ingresos" value={format_currency(stats.total_revenue)} subtitle="Total facturado" tone={Tone::Success} {loading} />
                <KpiCard title="Saldo pendiente" value={format_currency(stats.outstanding_balance)} subtitle="Por cobrar" tone={Tone::Warning} {loading} />
                <KpiCard title="Pedidos pendientes" value={format_count(stats.pending_orders)} subtitle="Sin completar" tone={Tone::Warning} {loading} />
                <KpiCard title="Ticket promedio" value={format_currency(Some(order_kpis.average_order_value))} subtitle="Por pedido" tone={Tone::Info} {loading} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Panel title="Ingresos por mes">
                    <RevenueChart series={series} />
                </Panel>

                <Panel title="Alertas">
                    <AlertList alerts={snapshot.alerts.clone()} {loading} />
                </Panel>

                <Panel title="Clientes con mayor saldo">
                    <div class="space-y-3">
                        { for top_clients.iter().map(|client| html! {
                            <div class="flex justify-between items-center">
                                <Link<Route> to={Route::ClientDetail { id: client.id.to_string() }}>
                                    <span style="color: var(--fg-primary);">{format_optional(Some(client.name.as_str()), "Sin nombre")}</span>
                                </Link<Route>>
                                <span class="font-mono" style="color: var(--fg-secondary);">{format_currency(client.balance)}</span>
                            </div>
                        }) }
                    </div>
                </Panel>
            </div>

            <div>
                <h3 class="text-lg font-medium mb-3" style="color: var(--fg-primary);">{"Pedidos más grandes"}</h3>
                <DataTable
                    columns={vec![Column::text("Pedido"), Column::text("Cliente"), Column::text("Estado"), Column::text("Fecha"), Column::numeric("Total")]}
                    state={ViewState::resolve(loading, snapshot.orders.len(), top_orders.len())}
                    empty_message="Todavía no hay pedidos"
                >
                    { for top_orders.iter().map(|order| html! {
                        <tr style="border-bottom: 1px solid var(--border-primary);">
                            <td class="py-3 px-4 font-mono" style="color: var(--accent-primary);">{format_optional(Some(order.number.as_str()), "-")}</td>
                            <td class="py-3 px-4" style="color: var(--fg-primary);">{format_optional(order.client_name.as_deref(), "-")}</td>
                            <td class="py-3 px-4"><StatusBadge value={order.status.clone()} /></td>
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{format_date(order.created_at.as_deref())}</td>
                            <td class="py-3 px-4 text-right font-mono" style="color: var(--fg-primary);">{format_currency(order.total)}</td>
                        </tr>
                    }) }
                </DataTable>
            </div>
        </div>
    }
}

// ===== Helper Components =====

#[derive(Properties, PartialEq)]
struct PanelProps {
    title: &'static str,
    children: Html,
}

#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    html! {
        <div class="rounded-lg" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
            <div class="px-4 py-3" style="border-bottom: 1px solid var(--border-primary);">
                <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{props.title}</h3>
            </div>
            <div class="p-4">
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AlertListProps {
    alerts: Vec<Alert>,
    loading: bool,
}

#[function_component(AlertList)]
fn alert_list(props: &AlertListProps) -> Html {
    if props.loading {
        return html! { <div class="h-24 rounded animate-pulse" style="background-color: var(--bg-tertiary);"></div> };
    }
    if props.alerts.is_empty() {
        return html! { <div class="text-sm" style="color: var(--fg-muted);">{"Sin alertas"}</div> };
    }

    html! {
        <ul class="space-y-3">
            { for props.alerts.iter().map(|alert| {
                let tone = status_tone(alert.severity.as_deref().unwrap_or_default());
                html! {
                    <li class="pl-3" style={format!("border-left: 3px solid {};", tone_color(tone))}>
                        <div class="flex justify-between">
                            <span class="font-medium" style="color: var(--fg-primary);">{format_optional(Some(alert.title.as_str()), "Alerta")}</span>
                            <StatusBadge value={alert.severity.clone()} />
                        </div>
                        <div class="text-sm" style="color: var(--fg-secondary);">{format_optional(alert.message.as_deref(), "")}</div>
                        <div class="text-xs mt-1" style="color: var(--fg-dimmed);">
                            {format_optional(alert.client_name.as_deref(), "")}{" · "}{format_date(alert.created_at.as_deref())}
                        </div>
                    </li>
                }
            }) }
        </ul>
    }
}
