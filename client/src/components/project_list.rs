//! Project sidebar: create form plus the selectable project list.

use leptos::prelude::*;
use studio::ProjectId;

use crate::actions::Handles;

#[component]
pub fn ProjectList() -> impl IntoView {
    let handles = Handles::from_context();
    let directory = handles.directory;

    let entries = move || {
        directory.with(|d| {
            let selected = d.selected_id();
            d.projects()
                .iter()
                .map(|p| (p.id, p.title.clone(), Some(p.id) == selected))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside class="project-list">
            <h2 class="project-list__heading">"Projects"</h2>
            <CreateProjectForm/>
            <Show
                when=move || !directory.with(studio::ProjectDirectory::is_empty)
                fallback=|| view! { <p class="project-list__empty">"No projects yet."</p> }
            >
                <ul class="project-list__items">
                    <For
                        each=entries
                        key=|entry| entry.clone()
                        children=move |(id, title, active)| view! { <ProjectEntry id=id title=title active=active/> }
                    />
                </ul>
            </Show>
        </aside>
    }
}

#[component]
fn ProjectEntry(id: ProjectId, title: String, active: bool) -> impl IntoView {
    let handles = Handles::from_context();

    view! {
        <li class="project-list__item" class:project-list__item--active=active>
            <button class="project-list__select" on:click=move |_| handles.select_project(id)>
                {title}
            </button>
            <button
                class="project-list__delete"
                title="Delete project"
                aria-label="Delete project"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    handles.delete_project(id);
                }
            >
                "✕"
            </button>
        </li>
    }
}

#[component]
fn CreateProjectForm() -> impl IntoView {
    let handles = Handles::from_context();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handles.create_project(title, description);
    };

    view! {
        <form class="project-form" on:submit=on_submit>
            <input
                class="project-form__input"
                type="text"
                placeholder="Project title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="project-form__input"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit">
                "Create Project"
            </button>
        </form>
    }
}
