// Client Detail - header plus one tab per slice of the client's history

use clientdesk_shared::{Client, format_currency, format_optional, initials};
use yew::prelude::*;
use yew_router::prelude::*;

use super::client_tabs::{MessagesTab, NotesTab, OrdersTab, SummaryTab, TransactionsTab};
use crate::components::{Route, StatusBadge};
use crate::fetch::use_fetch;
use crate::services::customers;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientTab {
    #[default]
    Summary,
    Orders,
    Transactions,
    Notes,
    Messages,
}

impl ClientTab {
    pub const ALL: [ClientTab; 5] = [
        ClientTab::Summary,
        ClientTab::Orders,
        ClientTab::Transactions,
        ClientTab::Notes,
        ClientTab::Messages,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClientTab::Summary => "Resumen",
            ClientTab::Orders => "Pedidos",
            ClientTab::Transactions => "Transacciones",
            ClientTab::Notes => "Notas",
            ClientTab::Messages => "Mensajes",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientDetailProps {
    pub id: String,
}

#[function_component(ClientDetailPage)]
pub fn client_detail_page(props: &ClientDetailProps) -> Html {
    let client = use_fetch("client detail", props.id.clone(), |api, id| async move {
        customers::get(&api, &id).await
    });
    let tab = use_state(ClientTab::default);

    // Another client starts again on the summary. Tabs are keyed by id so
    // their state and in-flight mutations never carry over.
    {
        let tab = tab.clone();
        use_effect_with(props.id.clone(), move |_| {
            tab.set(ClientTab::Summary);
        });
    }

    let header = match (client.data(), client.error()) {
        (Some(c), _) => html! { <ClientHeader client={c.clone()} /> },
        (None, Some(err)) if !client.loading() => html! {
            <div class="px-4 py-3 rounded-lg text-sm" style="color: var(--color-error); border: 1px solid var(--color-error);">
                {format!("No se pudo cargar el cliente: {}", err)}
            </div>
        },
        _ => html! {
            <div class="h-20 rounded-lg animate-pulse" style="background-color: var(--bg-secondary);"></div>
        },
    };

    let body = match *tab {
        ClientTab::Summary => html! { <SummaryTab client={client.data().cloned()} key={props.id.clone()} client_id={props.id.clone()} /> },
        ClientTab::Orders => html! { <OrdersTab key={props.id.clone()} client_id={props.id.clone()} /> },
        ClientTab::Transactions => html! { <TransactionsTab key={props.id.clone()} client_id={props.id.clone()} /> },
        ClientTab::Notes => html! { <NotesTab key={props.id.clone()} client_id={props.id.clone()} /> },
        ClientTab::Messages => html! { <MessagesTab key={props.id.clone()} client_id={props.id.clone()} /> },
    };

    html! {
        <div class="p-6 space-y-6">
            <Link<Route> to={Route::Clients}>
                <span class="text-sm" style="color: var(--fg-muted);">{"← Volver a clientes"}</span>
            </Link<Route>>

            {header}

            <div class="flex space-x-1" style="border-bottom: 1px solid var(--border-primary);">
                { for ClientTab::ALL.iter().map(|item| {
                    let active = *item == *tab;
                    let onclick = {
                        let tab = tab.clone();
                        let item = *item;
                        Callback::from(move |_: MouseEvent| tab.set(item))
                    };
                    let style = if active {
                        "color: var(--accent-primary); border-bottom: 2px solid var(--accent-primary);"
                    } else {
                        "color: var(--fg-muted); border-bottom: 2px solid transparent;"
                    };
                    html! {
                        <button class="px-4 py-2 text-sm font-medium" {style} {onclick}>{item.label()}</button>
                    }
                }) }
            </div>

            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClientHeaderProps {
    client: Client,
}

#[function_component(ClientHeader)]
fn client_header(props: &ClientHeaderProps) -> Html {
    let client = &props.client;

    html! {
        <div class="rounded-lg p-6 flex items-center justify-between"
            style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
            <div class="flex items-center space-x-4">
                <div class="w-14 h-14 rounded-full flex items-center justify-center text-lg font-bold"
                    style="background-color: var(--accent-primary); color: var(--button-primary-text);">
                    {initials(&client.name)}
                </div>
                <div>
                    <div class="flex items-center space-x-3">
                        <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">
                            {format_optional(Some(client.name.as_str()), "Sin nombre")}
                        </h1>
                        <StatusBadge value={client.status.clone()} />
                    </div>
                    <p class="mt-1 text-sm" style="color: var(--fg-muted);">
                        {format_optional(client.company.as_deref(), "Sin empresa")}
                        {" · "}
                        {format_optional(client.email.as_deref(), "Sin email")}
                    </p>
                </div>
            </div>
            <div class="text-right">
                <div class="text-sm" style="color: var(--fg-muted);">{"Saldo"}</div>
                <div class="text-2xl font-bold font-mono" style="color: var(--fg-primary);">{format_currency(client.balance)}</div>
            </div>
        </div>
    }
}
