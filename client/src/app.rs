//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use studio::{DesignWorkflow, ProjectDirectory};

use crate::pages::{login::LoginPage, workspace::WorkspacePage};
use crate::state::notice::Notice;
use crate::state::session::SessionState;
use crate::state::sketch::SketchState;
use crate::util::config::{API_META_NAME, ClientConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is written into a meta tag the client reads at startup.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_document());
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(ProjectDirectory::default()));
    provide_context(RwSignal::new(DesignWorkflow::default()));
    provide_context(RwSignal::new(SketchState::default()));
    provide_context(RwSignal::new(None::<Notice>));

    let handles = crate::actions::Handles::from_context();
    Effect::new(move || handles.restore_session());

    view! {
        <Stylesheet id="leptos" href="/pkg/archassist.css"/>
        <Title text="Architectural Design Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
