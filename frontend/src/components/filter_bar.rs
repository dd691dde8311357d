use clientdesk_shared::{FilterCriteria, MATCH_ALL, Selector};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Raw filter inputs for one view: search text plus the two dropdown choices.
#[derive(Clone)]
pub struct UseFiltersHandle {
    pub search: UseStateHandle<String>,
    pub kind: UseStateHandle<String>,
    pub status: UseStateHandle<String>,
}

impl UseFiltersHandle {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_search(self.search.as_str())
            .with_kind(Selector::from_choice(&self.kind))
            .with_status(Selector::from_choice(&self.status))
    }

    pub fn on_search(&self) -> Callback<String> {
        setter(&self.search)
    }

    pub fn on_kind(&self) -> Callback<String> {
        setter(&self.kind)
    }

    pub fn on_status(&self) -> Callback<String> {
        setter(&self.status)
    }
}

fn setter(handle: &UseStateHandle<String>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(value))
}

#[hook]
pub fn use_filters() -> UseFiltersHandle {
    let search = use_state(String::new);
    let kind = use_state(String::new);
    let status = use_state(String::new);

    UseFiltersHandle { search, kind, status }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub search: String,
    pub on_search: Callback<String>,
    #[prop_or("Buscar...")]
    pub placeholder: &'static str,
    /// Choices for the type dropdown; hidden when `None`.
    #[prop_or_default]
    pub kinds: Option<Vec<String>>,
    #[prop_or_default]
    pub kind: String,
    #[prop_or_default]
    pub on_kind: Callback<String>,
    /// Choices for the status dropdown; hidden when `None`.
    #[prop_or_default]
    pub statuses: Option<Vec<String>>,
    #[prop_or_default]
    pub status: String,
    #[prop_or_default]
    pub on_status: Callback<String>,
}

/// Search box plus optional type/status dropdowns. Each dropdown starts
/// with the match-all choice.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <div class="flex items-center space-x-3 mb-4">
            <input
                type="text"
                class="flex-1 px-3 py-2 rounded-lg text-sm"
                style="background-color: var(--bg-tertiary); color: var(--fg-primary); border: 1px solid var(--border-primary);"
                placeholder={props.placeholder}
                value={props.search.clone()}
                {oninput}
            />
            if let Some(kinds) = &props.kinds {
                <Dropdown options={kinds.clone()} selected={props.kind.clone()} on_change={props.on_kind.clone()} />
            }
            if let Some(statuses) = &props.statuses {
                <Dropdown options={statuses.clone()} selected={props.status.clone()} on_change={props.on_status.clone()} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DropdownProps {
    options: Vec<String>,
    selected: String,
    on_change: Callback<String>,
}

#[function_component(Dropdown)]
fn dropdown(props: &DropdownProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let choices = std::iter::once(MATCH_ALL.to_string()).chain(props.options.iter().cloned());
    let current = Selector::from_choice(&props.selected);

    html! {
        <select
            class="px-3 py-2 rounded-lg text-sm"
            style="background-color: var(--bg-tertiary); color: var(--fg-primary); border: 1px solid var(--border-primary);"
            {onchange}
        >
            { for choices.map(|choice| {
                let selected = choice == current.as_choice();
                html! { <option value={choice.clone()} {selected}>{choice}</option> }
            }) }
        </select>
    }
}
