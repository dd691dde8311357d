use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod fetch;
mod pages;
mod services;
mod theme;

use components::{Layout, Route};
use config::AppConfig;
use pages::{
    client_detail::ClientDetailPage,
    clients::ClientsPage,
    dashboard::DashboardPage,
    orders::OrdersPage,
};
use services::ApiClient;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Clients => html! { <ClientsPage /> },
        Route::ClientDetail { id } => html! { <ClientDetailPage {id} /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center" style="background-color: var(--bg-primary);">
                <div class="text-center">
                    <h1 class="text-6xl font-bold" style="color: var(--fg-primary);">{"404"}</h1>
                    <p class="text-xl mt-4" style="color: var(--fg-muted);">{"Página no encontrada"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<ApiClient> context={(*api).clone()}>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ContextProvider<ApiClient>>
        </ContextProvider<AppConfig>>
    }
}

fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // The console stamps each line itself.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}

fn add_stylesheet(document: &web_sys::Document, head: &web_sys::HtmlHeadElement, href: &str) {
    let Ok(link) = document.create_element("link") else {
        return;
    };
    let added = link
        .set_attribute("href", href)
        .and_then(|_| link.set_attribute("rel", "stylesheet"))
        .and_then(|_| head.append_child(&link).map(|_| ()));
    if added.is_err() {
        tracing::warn!(href, "could not add stylesheet");
    }
}

fn main() {
    init_tracing();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(head) = document.head() {
            // Tailwind utilities
            add_stylesheet(&document, &head, "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css");
            // Fonts (Inter + JetBrains Mono for figures)
            add_stylesheet(&document, &head, "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;700&family=Inter:wght@300;400;500;600;700&display=swap");
            // Palette variables used by every inline style
            add_stylesheet(&document, &head, "/static/themes.css");
        }
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting clientdesk");
    yew::Renderer::<App>::new().render();
}
