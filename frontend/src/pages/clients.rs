// Clients Page - searchable client directory

use clientdesk_shared::{
    Client, ViewState, distinct_values, filter_records, format_currency, format_date,
    format_optional, initials,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Column, DataTable, FilterBar, Route, StatusBadge, use_filters};
use crate::fetch::use_fetch;
use crate::services::customers;
use crate::theme::amount_color;

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let clients = use_fetch("clients", (), |api, _| async move { customers::list(&api).await });
    let filters = use_filters();
    let navigator = use_navigator();

    let all: &[Client] = clients.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &filters.criteria());
    let statuses = distinct_values(all, |c| c.status.as_deref());
    let state = ViewState::resolve(clients.loading(), all.len(), visible.len());

    let columns = vec![
        Column::text("Cliente"),
        Column::text("Empresa"),
        Column::text("Contacto"),
        Column::text("Estado"),
        Column::numeric("Saldo"),
        Column::text("Última actividad"),
    ];

    html! {
        <div class="p-6">
            <div class="mb-6">
                <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">{"Clientes"}</h1>
                <p class="mt-1" style="color: var(--fg-muted);">
                    { if state == ViewState::Loading { "Cargando...".to_string() } else { format!("{} de {} clientes", visible.len(), all.len()) } }
                </p>
            </div>

            if let Some(err) = clients.error() {
                <div class="mb-4 px-4 py-3 rounded-lg text-sm" style="color: var(--color-error); border: 1px solid var(--color-error);">
                    {format!("No se pudo cargar la lista de clientes: {}", err)}
                </div>
            }

            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar por nombre, empresa, email o teléfono..."
                statuses={Some(statuses)}
                status={(*filters.status).clone()}
                on_status={filters.on_status()}
            />

            <DataTable {columns} {state} empty_message="Todavía no hay clientes registrados">
                { for visible.iter().map(|client| {
                    let onclick = {
                        let navigator = navigator.clone();
                        let id = client.id.to_string();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(nav) = &navigator {
                                nav.push(&Route::ClientDetail { id: id.clone() });
                            }
                        })
                    };
                    let balance = client.balance.unwrap_or_default();

                    html! {
                        <tr class="cursor-pointer" style="border-bottom: 1px solid var(--border-primary);" {onclick}>
                            <td class="py-3 px-4">
                                <div class="flex items-center space-x-3">
                                    <div class="w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold"
                                        style="background-color: var(--accent-primary); color: var(--button-primary-text);">
                                        {initials(&client.name)}
                                    </div>
                                    <span class="font-medium" style="color: var(--fg-primary);">{format_optional(Some(client.name.as_str()), "Sin nombre")}</span>
                                </div>
                            </td>
                            <td class="py-3 px-4" style="color: var(--fg-secondary);">{format_optional(client.company.as_deref(), "-")}</td>
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">
                                <div>{format_optional(client.email.as_deref(), "-")}</div>
                                <div style="color: var(--fg-muted);">{format_optional(client.phone.as_deref(), "")}</div>
                            </td>
                            <td class="py-3 px-4"><StatusBadge value={client.status.clone()} /></td>
                            <td class="py-3 px-4 text-right font-mono"
                                style={format!("color: {};", amount_color(balance.is_sign_negative(), balance.is_zero()))}>
                                {format_currency(client.balance)}
                            </td>
                            <td class="py-3 px-4 text-sm" style="color: var(--fg-muted);">{format_date(client.last_activity_at.as_deref())}</td>
                        </tr>
                    }
                }) }
            </DataTable>
        </div>
    }
}
