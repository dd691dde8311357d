use clientdesk_shared::{
    Message, ViewState, distinct_values, filter_records, format_date_time, format_optional,
};
use yew::prelude::*;

use super::replace_by_id;
use crate::components::{FilterBar, StatusBadge, use_filters};
use crate::fetch::{use_api, use_fetch};
use crate::services::{customers, messages};

#[derive(Properties, PartialEq)]
pub struct MessagesTabProps {
    pub client_id: String,
}

#[function_component(MessagesTab)]
pub fn messages_tab(props: &MessagesTabProps) -> Html {
    let api = use_api();
    let fetched = use_fetch("client messages", props.client_id.clone(), |api, id| async move {
        customers::messages(&api, &id).await
    });
    let filters = use_filters();

    let all: &[Message] = fetched.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &filters.criteria());
    let channels = distinct_values(all, |m| m.channel.as_deref());
    let statuses = distinct_values(all, |m| m.status.as_deref());
    let unread = all.iter().filter(|m| !m.is_read).count();
    let state = ViewState::resolve(fetched.loading(), all.len(), visible.len());

    let mark_read = |message: &Message| {
        let api = api.clone();
        let fetched = fetched.clone();
        let message_id = message.id.to_string();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let fetched = fetched.clone();
            let message_id = message_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match messages::mark_read(&api, &message_id).await {
                    Ok(message) => {
                        fetched.update(move |current: &Vec<Message>| replace_by_id(current, message, |m| &m.id));
                    }
                    Err(err) => tracing::warn!(message_id = %message_id, "marking message read failed: {}", err),
                }
            });
        })
    };

    html! {
        <div class="space-y-4">
            if unread > 0 {
                <div class="text-sm" style="color: var(--accent-primary);">
                    { if unread == 1 { "1 mensaje sin leer".to_string() } else { format!("{} mensajes sin leer", unread) } }
                </div>
            }

            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar por asunto, remitente o contenido..."
                kinds={Some(channels)}
                kind={(*filters.kind).clone()}
                on_kind={filters.on_kind()}
                statuses={Some(statuses)}
                status={(*filters.status).clone()}
                on_status={filters.on_status()}
            />

            { match state {
                ViewState::Loading => html! {
                    <div class="h-32 rounded-lg animate-pulse" style="background-color: var(--bg-secondary);"></div>
                },
                ViewState::Empty => html! {
                    <div class="text-center py-12" style="color: var(--fg-muted);">{"Este cliente no tiene mensajes"}</div>
                },
                ViewState::NoResults => html! {
                    <div class="text-center py-12" style="color: var(--fg-muted);">{"Ningún mensaje coincide con los filtros"}</div>
                },
                ViewState::Populated => html! {
                    <ul class="space-y-3">
                        { for visible.iter().map(|message| html! {
                            <li class="rounded-lg p-4"
                                style={if message.is_read {
                                    "background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                                } else {
                                    "background-color: var(--bg-tertiary); border: 1px solid var(--accent-primary);"
                                }}>
                                <div class="flex items-center justify-between mb-1">
                                    <div class="flex items-center space-x-2 text-sm">
                                        <span class={if message.is_read { "" } else { "font-bold" }} style="color: var(--fg-primary);">
                                            {format_optional(message.subject.as_deref(), "(sin asunto)")}
                                        </span>
                                        <StatusBadge value={message.channel.clone()} />
                                        <StatusBadge value={message.status.clone()} />
                                    </div>
                                    if !message.is_read {
                                        <button class="text-xs" style="color: var(--accent-primary);" onclick={mark_read(message)}>
                                            {"Marcar como leído"}
                                        </button>
                                    }
                                </div>
                                <div class="text-xs mb-2" style="color: var(--fg-dimmed);">
                                    {format_optional(message.sender.as_deref(), "Desconocido")}
                                    {" · "}
                                    {format_optional(message.direction.as_deref(), "-")}
                                    {" · "}
                                    {format_date_time(message.created_at.as_deref())}
                                </div>
                                <p class="text-sm whitespace-pre-line" style="color: var(--fg-secondary);">{&message.body}</p>
                            </li>
                        }) }
                    </ul>
                },
            } }
        </div>
    }
}
