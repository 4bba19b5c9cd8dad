//! Workspace page: projects, brief, sketch pad and generated design.
//! Redirects to `/login` once the session has settled without a user.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::Handles;
use crate::components::design_result::DesignResultPanel;
use crate::components::notice_banner::NoticeBanner;
use crate::components::project_list::ProjectList;
use crate::components::sketch_pad::SketchPad;
use crate::util::guard::install_unauth_redirect;

/// Generate button text.
pub fn generate_label(busy: bool) -> &'static str {
    if busy { "Generating..." } else { "Generate Design" }
}

/// Heading over the brief editor.
pub fn brief_heading(selected_title: Option<&str>) -> String {
    match selected_title {
        Some(title) => format!("Design Brief: {title}"),
        None => "Select or create a project".to_owned(),
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let handles = Handles::from_context();
    let session = handles.session;
    let directory = handles.directory;
    let workflow = handles.workflow;
    install_unauth_redirect(session, use_navigate());

    let busy = move || workflow.with(studio::DesignWorkflow::is_busy);
    let heading = move || directory.with(|d| brief_heading(d.selected().map(|p| p.title.as_str())));

    view! {
        <div class="workspace-page">
            <header class="workspace-page__header">
                <h1>"Architectural Design Assistant"</h1>
                <span class="workspace-page__user">{move || session.with(|s| s.greeting()).unwrap_or_default()}</span>
                <button class="btn" on:click=move |_| handles.logout()>
                    "Logout"
                </button>
            </header>
            <NoticeBanner/>
            <div class="workspace-page__body">
                <ProjectList/>
                <main class="workspace-page__main">
                    <h2>{heading}</h2>
                    <textarea
                        class="brief-input"
                        rows="4"
                        placeholder="Describe the building you want: size, style, materials, constraints..."
                        prop:value=move || directory.with(|d| d.brief().to_owned())
                        on:input=move |ev| handles.set_brief(event_target_value(&ev))
                    ></textarea>
                    <h3>"Sketch"</h3>
                    <SketchPad/>
                    <button
                        class="btn btn--primary workspace-page__generate"
                        disabled=busy
                        on:click=move |_| handles.generate_design()
                    >
                        {move || generate_label(busy())}
                    </button>
                    <DesignResultPanel/>
                </main>
            </div>
        </div>
    }
}
