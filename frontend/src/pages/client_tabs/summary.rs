use clientdesk_shared::{
    Client, OrderKpis, Record, Tone, format_amount_or_placeholder, format_count, format_currency,
    format_date, format_date_time, format_optional, most_recent,
};
use yew::prelude::*;

use crate::components::{KpiCard, StatusBadge};
use crate::fetch::{settle, use_fetch};
use crate::services::{customers, notes, ApiClient, ApiResult};

const RECENT_ACTIVITY: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
struct Activity {
    kpis: OrderKpis,
    records: Vec<Record>,
}

async fn load_activity(api: ApiClient, client_id: String) -> ApiResult<Activity> {
    let (orders, transactions, notes, messages) = futures::join!(
        customers::orders(&api, &client_id),
        customers::transactions(&api, &client_id),
        notes::list(&api, &client_id),
        customers::messages(&api, &client_id),
    );

    let orders = settle("client orders", orders).unwrap_or_default();
    let kpis = OrderKpis::from_orders(&orders);

    let mut records: Vec<Record> = orders.into_iter().map(Record::Order).collect();
    records.extend(settle("client transactions", transactions).into_iter().flatten().map(Record::Transaction));
    records.extend(settle("client notes", notes).into_iter().flatten().map(Record::Note));
    records.extend(settle("client messages", messages).into_iter().flatten().map(Record::Message));

    Ok(Activity { kpis, records })
}

#[derive(Properties, PartialEq)]
pub struct SummaryTabProps {
    pub client: Option<Client>,
    pub client_id: String,
}

#[function_component(SummaryTab)]
pub fn summary_tab(props: &SummaryTabProps) -> Html {
    let activity = use_fetch("client summary", props.client_id.clone(), load_activity);
    let loading = activity.loading();
    let snapshot = activity.data().cloned().unwrap_or_default();
    let recent = most_recent(&snapshot.records, RECENT_ACTIVITY);

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <KpiCard title="Pedidos" value={format_count(snapshot.kpis.order_count as i64)} subtitle="Históricos" {loading} />
                <KpiCard title="Facturado" value={format_currency(Some(snapshot.kpis.revenue))} subtitle="Total de pedidos" tone={Tone::Success} {loading} />
                <KpiCard title="Ticket promedio" value={format_currency(Some(snapshot.kpis.average_order_value))} subtitle="Por pedido" tone={Tone::Info} {loading} />
                <KpiCard title="Pendientes" value={format_count(snapshot.kpis.pending_count as i64)} subtitle="Pedidos abiertos" tone={Tone::Warning} {loading} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="rounded-lg p-4" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                    <h3 class="text-lg font-medium mb-4" style="color: var(--fg-primary);">{"Datos de la cuenta"}</h3>
                    if let Some(client) = &props.client {
                        <dl class="grid grid-cols-2 gap-y-3 text-sm">
                            <Field label="Email" value={format_optional(client.email.as_deref(), "-")} />
                            <Field label="Teléfono" value={format_optional(client.phone.as_deref(), "-")} />
                            <Field label="Empresa" value={format_optional(client.company.as_deref(), "-")} />
                            <Field label="RFC" value={format_optional(client.tax_id.as_deref(), "-")} />
                            <Field label="Dirección" value={format_optional(client.address.as_deref(), "-")} />
                            <Field label="Saldo" value={format_currency(client.balance)} />
                            <Field label="Límite de crédito" value={format_amount_or_placeholder(client.credit_limit)} />
                            <Field label="Cliente desde" value={format_date(client.created_at.as_deref())} />
                            <Field label="Última actividad" value={format_date_time(client.last_activity_at.as_deref())} />
                        </dl>
                    } else {
                        <div class="h-40 rounded animate-pulse" style="background-color: var(--bg-tertiary);"></div>
                    }
                </div>

                <div class="rounded-lg p-4" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                    <h3 class="text-lg font-medium mb-4" style="color: var(--fg-primary);">{"Actividad reciente"}</h3>
                    if loading {
                        <div class="h-40 rounded animate-pulse" style="background-color: var(--bg-tertiary);"></div>
                    } else if recent.is_empty() {
                        <div class="text-sm" style="color: var(--fg-muted);">{"Sin actividad registrada"}</div>
                    } else {
                        <ul class="space-y-3">
                            { for recent.iter().map(|record| html! {
                                <li class="flex items-start justify-between text-sm">
                                    <div>
                                        <div class="flex items-center space-x-2">
                                            <span class="text-xs font-medium" style="color: var(--fg-muted);">{record.kind_label()}</span>
                                            if record.status().is_some() {
                                                <StatusBadge value={record.status().map(str::to_string)} />
                                            }
                                        </div>
                                        <div style="color: var(--fg-primary);">{format_optional(Some(record.headline()), "-")}</div>
                                        <div class="text-xs" style="color: var(--fg-dimmed);">{format_date_time(record.timestamp())}</div>
                                    </div>
                                    if record.amount().is_some() {
                                        <span class="font-mono" style="color: var(--fg-secondary);">{format_currency(record.amount())}</span>
                                    }
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: &'static str,
    value: String,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <>
            <dt style="color: var(--fg-muted);">{props.label}</dt>
            <dd style="color: var(--fg-primary);">{&props.value}</dd>
        </>
    }
}
