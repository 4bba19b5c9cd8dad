//! Generated design narrative, compliance notes and concept preview.

use leptos::prelude::*;

use crate::actions::Handles;
use crate::components::design_preview::DesignPreview;

#[component]
pub fn DesignResultPanel() -> impl IntoView {
    let handles = Handles::from_context();
    let directory = handles.directory;
    let api_base = handles.api_base();

    let concept = Signal::derive(move || {
        directory.with(|d| d.last_result().and_then(|r| r.design_concept_url.clone()))
    });

    view! {
        <section class="design-result">
            {move || {
                directory
                    .with(|d| d.last_result().cloned())
                    .map(|result| {
                        view! {
                            <div class="design-result__text">
                                <h3>"Design Narrative"</h3>
                                <p class="design-result__narrative">{result.design_narrative}</p>
                                <h3>"Compliance Notes"</h3>
                                <p class="design-result__compliance">{result.compliance_notes}</p>
                            </div>
                        }
                    })
            }}
            <h3>"3D Preview"</h3>
            <DesignPreview concept=concept api_base=api_base/>
        </section>
    }
}
