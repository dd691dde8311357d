use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/clients")]
    Clients,
    #[at("/clients/:id")]
    ClientDetail { id: String },
    #[at("/orders")]
    Orders,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Section a route belongs to, for highlighting the sidebar.
    fn section(&self) -> Option<Route> {
        match self {
            Route::Dashboard => Some(Route::Dashboard),
            Route::Clients | Route::ClientDetail { .. } => Some(Route::Clients),
            Route::Orders => Some(Route::Orders),
            Route::NotFound => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Header bar plus collapsible sidebar around the routed page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Dashboard);
    let sidebar_collapsed = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_collapsed = sidebar_collapsed.clone();
        Callback::from(move |_| sidebar_collapsed.set(!*sidebar_collapsed))
    };

    let sidebar_width = if *sidebar_collapsed { "w-16" } else { "w-64" };

    html! {
        <div class="min-h-screen flex flex-col" style="background-color: var(--bg-primary);">
            <header class="h-14 flex-shrink-0" style="background-color: var(--bg-secondary); border-bottom: 1px solid var(--border-primary);">
                <div class="h-full flex items-center px-4 space-x-2">
                    <div class="w-8 h-8 rounded flex items-center justify-center" style="background-color: var(--accent-primary);">
                        <span class="font-bold text-lg" style="color: var(--button-primary-text);">{"C"}</span>
                    </div>
                    if !*sidebar_collapsed {
                        <span class="font-semibold text-lg" style="color: var(--fg-primary);">{"Clientdesk"}</span>
                    }
                </div>
            </header>

            <div class="flex flex-1 overflow-hidden">
                <aside
                    class={format!("flex-shrink-0 transition-all duration-200 {}", sidebar_width)}
                    style="background-color: var(--bg-secondary); border-right: 1px solid var(--border-primary);"
                >
                    <div class="p-2" style="border-bottom: 1px solid var(--border-primary);">
                        <button
                            onclick={toggle_sidebar}
                            class="w-full p-2 rounded text-sm"
                            style="color: var(--fg-muted);"
                        >
                            { if *sidebar_collapsed { "»" } else { "« Ocultar" } }
                        </button>
                    </div>
                    <nav class="py-4">
                        <SidebarLink route={Route::Dashboard} label="Resumen" glyph="◧" collapsed={*sidebar_collapsed} current={current_route.clone()} />
                        <SidebarLink route={Route::Clients} label="Clientes" glyph="☺" collapsed={*sidebar_collapsed} current={current_route.clone()} />
                        <SidebarLink route={Route::Orders} label="Pedidos" glyph="≡" collapsed={*sidebar_collapsed} current={current_route.clone()} />
                    </nav>
                </aside>

                <main class="flex-1 overflow-auto">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}

// ===== HELPER COMPONENTS =====

#[derive(Properties, PartialEq)]
struct SidebarLinkProps {
    route: Route,
    label: &'static str,
    glyph: &'static str,
    collapsed: bool,
    current: Route,
}

#[function_component(SidebarLink)]
fn sidebar_link(props: &SidebarLinkProps) -> Html {
    let is_active = props.current.section().as_ref() == Some(&props.route);
    let style = if is_active {
        "background-color: var(--button-primary-bg); color: var(--button-primary-text);"
    } else {
        "color: var(--fg-secondary);"
    };

    html! {
        <Link<Route> to={props.route.clone()} classes="flex items-center space-x-3 mx-2 px-3 py-2 rounded-lg text-sm">
            <span {style} class="flex items-center space-x-3 w-full">
                <span class="w-5 text-center">{props.glyph}</span>
                if !props.collapsed {
                    <span>{props.label}</span>
                }
            </span>
        </Link<Route>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_pages_highlight_their_section() {
        let detail = Route::ClientDetail { id: "7".into() };

        assert_eq!(detail.section(), Some(Route::Clients));
        assert_eq!(Route::Orders.section(), Some(Route::Orders));
        assert_eq!(Route::NotFound.section(), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ClientDetail { id: "42".into() }.to_path(), "/clients/42");
        assert_eq!(Route::Orders.to_path(), "/orders");
    }
}
