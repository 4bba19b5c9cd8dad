//! Dismissible banner for the current notice.

use leptos::prelude::*;

use crate::actions::Handles;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let handles = Handles::from_context();
    let notice = handles.notice;

    move || {
        notice.get().map(|notice| {
            let class = notice.class();
            view! {
                <div class=class role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button class="notice__dismiss" aria-label="Dismiss" on:click=move |_| handles.dismiss_notice()>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
