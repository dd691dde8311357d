use clientdesk_shared::{
    NewNote, Note, ViewState, distinct_values, filter_records, format_date_time, format_optional,
};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::{prepend, replace_by_id};
use crate::components::{FilterBar, StatusBadge, use_filters};
use crate::fetch::{use_api, use_fetch};
use crate::services::notes;

#[derive(Properties, PartialEq)]
pub struct NotesTabProps {
    pub client_id: String,
}

#[function_component(NotesTab)]
pub fn notes_tab(props: &NotesTabProps) -> Html {
    let api = use_api();
    let fetched = use_fetch("client notes", props.client_id.clone(), |api, id| async move {
        notes::list(&api, &id).await
    });
    let filters = use_filters();
    let draft = use_state(String::new);
    let saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    let all: &[Note] = fetched.data().map(Vec::as_slice).unwrap_or_default();
    let visible = filter_records(all, &filters.criteria());
    let kinds = distinct_values(all, |n| n.kind.as_deref());
    let state = ViewState::resolve(fetched.loading(), all.len(), visible.len());

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_submit = {
        let api = api.clone();
        let fetched = fetched.clone();
        let client_id = props.client_id.clone();
        let draft = draft.clone();
        let saving = saving.clone();
        let save_error = save_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = draft.trim().to_string();
            if body.is_empty() || *saving {
                return;
            }
            saving.set(true);

            let api = api.clone();
            let fetched = fetched.clone();
            let client_id = client_id.clone();
            let draft = draft.clone();
            let saving = saving.clone();
            let save_error = save_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match notes::create(&api, &client_id, &NewNote { body, kind: None }).await {
                    Ok(note) => {
                        fetched.update(move |current: &Vec<Note>| prepend(current, note));
                        draft.set(String::new());
                        save_error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!(client_id = %client_id, "creating note failed: {}", err);
                        save_error.set(Some(err.message));
                    }
                }
                saving.set(false);
            });
        })
    };

    let mark_read = |note: &Note| {
        let api = api.clone();
        let fetched = fetched.clone();
        let note_id = note.id.to_string();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let fetched = fetched.clone();
            let note_id = note_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match notes::mark_read(&api, &note_id).await {
                    Ok(note) => {
                        fetched.update(move |current: &Vec<Note>| replace_by_id(current, note, |n| &n.id));
                    }
                    Err(err) => tracing::warn!(note_id = %note_id, "marking note read failed: {}", err),
                }
            });
        })
    };

    html! {
        <div class="space-y-4">
            <form onsubmit={on_submit} class="rounded-lg p-4 space-y-3"
                style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                <textarea
                    class="w-full px-3 py-2 rounded-lg text-sm"
                    style="background-color: var(--bg-tertiary); color: var(--fg-primary); border: 1px solid var(--border-primary);"
                    rows="3"
                    placeholder="Escribe una nota sobre este cliente..."
                    value={(*draft).clone()}
                    oninput={on_input}
                />
                <div class="flex items-center justify-between">
                    <span class="text-sm" style="color: var(--color-error);">
                        {(*save_error).clone().unwrap_or_default()}
                    </span>
                    <button
                        type="submit"
                        disabled={*saving || draft.trim().is_empty()}
                        class="px-4 py-2 rounded-lg font-medium text-sm"
                        style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                    >
                        { if *saving { "Guardando..." } else { "Agregar nota" } }
                    </button>
                </div>
            </form>

            <FilterBar
                search={(*filters.search).clone()}
                on_search={filters.on_search()}
                placeholder="Buscar en notas..."
                kinds={Some(kinds)}
                kind={(*filters.kind).clone()}
                on_kind={filters.on_kind()}
            />

            { match state {
                ViewState::Loading => html! {
                    <div class="h-32 rounded-lg animate-pulse" style="background-color: var(--bg-secondary);"></div>
                },
                ViewState::Empty => html! {
                    <div class="text-center py-12" style="color: var(--fg-muted);">{"Este cliente no tiene notas"}</div>
                },
                ViewState::NoResults => html! {
                    <div class="text-center py-12" style="color: var(--fg-muted);">{"Ninguna nota coincide con los filtros"}</div>
                },
                ViewState::Populated => html! {
                    <ul class="space-y-3">
                        { for visible.iter().map(|note| html! {
                            <li class="rounded-lg p-4"
                                style={if note.is_read {
                                    "background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                                } else {
                                    "background-color: var(--bg-secondary); border: 1px solid var(--accent-primary);"
                                }}>
                                <div class="flex items-center justify-between mb-2">
                                    <div class="flex items-center space-x-2 text-sm">
                                        <span class="font-medium" style="color: var(--fg-primary);">{format_optional(note.author.as_deref(), "Anónimo")}</span>
                                        if note.kind.is_some() {
                                            <StatusBadge value={note.kind.clone()} />
                                        }
                                        <span style="color: var(--fg-dimmed);">{format_date_time(note.created_at.as_deref())}</span>
                                    </div>
                                    if !note.is_read {
                                        <button class="text-xs" style="color: var(--accent-primary);" onclick={mark_read(note)}>
                                            {"Marcar como leída"}
                                        </button>
                                    }
                                </div>
                                <p class="text-sm whitespace-pre-line" style="color: var(--fg-secondary);">{&note.body}</p>
                            </li>
                        }) }
                    </ul>
                },
            } }
        </div>
    }
}
