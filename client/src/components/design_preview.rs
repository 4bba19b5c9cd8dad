//! Placeholder preview of the generated design concept.
//!
//! Always draws the same box on a grid. When the backend returned a concept
//! reference the asset is linked underneath; it is never fetched.

#[cfg(test)]
#[path = "design_preview_test.rs"]
mod design_preview_test;

use leptos::prelude::*;
use studio::endpoints::resolve_asset;

const GRID_CELLS: u32 = 10;
const VIEW_SIZE: f64 = 200.0;

/// Link target for a concept reference, resolved against the API base.
pub fn asset_link(api_base: &str, concept: Option<&str>) -> Option<String> {
    concept
        .map(str::trim)
        .filter(|reference| !reference.is_empty())
        .map(|reference| resolve_asset(api_base, reference))
}

/// Grid line offsets in view units, borders included.
pub fn grid_offsets(cells: u32, size: f64) -> Vec<f64> {
    let step = size / f64::from(cells.max(1));
    (0..=cells).map(|i| f64::from(i) * step).collect()
}

#[component]
pub fn DesignPreview(#[prop(into)] concept: Signal<Option<String>>, api_base: String) -> impl IntoView {
    let link = move || asset_link(&api_base, concept.get().as_deref());
    let lines = grid_offsets(GRID_CELLS, VIEW_SIZE)
        .into_iter()
        .map(|offset| {
            view! {
                <line x1=offset y1=0.0 x2=offset y2=VIEW_SIZE></line>
                <line x1=0.0 y1=offset x2=VIEW_SIZE y2=offset></line>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="design-preview">
            <svg class="design-preview__scene" viewBox="0 0 200 200" aria-label="Design concept preview">
                <g class="design-preview__grid">{lines}</g>
                <g class="design-preview__box">
                    <polygon points="100,50 150,75 100,100 50,75"></polygon>
                    <polygon points="50,75 100,100 100,150 50,125"></polygon>
                    <polygon points="150,75 100,100 100,150 150,125"></polygon>
                </g>
            </svg>
            {move || {
                link()
                    .map(|href| {
                        view! {
                            <a class="design-preview__asset" href=href target="_blank" rel="noopener">
                                "Open concept model"
                            </a>
                        }
                    })
            }}
        </div>
    }
}
