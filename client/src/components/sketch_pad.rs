//! Freehand sketch pad drawn on a `<canvas>`.
//!
//! DESIGN
//! ======
//! Strokes live in the shared `SketchState` signal; the canvas is only a
//! view of it and is repainted whenever the signal changes. The pad marks the
//! state as mounted while its canvas is on screen so snapshot reads can tell
//! "nothing drawn" from "no pad".

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::actions::Handles;
#[cfg(feature = "hydrate")]
use crate::state::sketch::SketchState;
use crate::state::sketch::{CANVAS_HEIGHT, CANVAS_WIDTH};

fn pointer_point(ev: &leptos::ev::PointerEvent) -> (f64, f64) {
    (f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[component]
pub fn SketchPad() -> impl IntoView {
    let handles = Handles::from_context();
    let sketch = handles.sketch;
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let present = canvas_ref.get().is_some();
        sketch.update(|s| s.mounted = present);
    });
    on_cleanup(move || {
        sketch.try_update(|s| {
            s.mounted = false;
            s.drawing = false;
        });
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        sketch.with(|state| paint(&canvas, state));
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                leptos::logging::warn!("pointer capture failed: {e:?}");
            }
        }
        let (x, y) = pointer_point(&ev);
        sketch.update(|s| s.begin_stroke(x, y));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !sketch.with_untracked(|s| s.drawing) {
            return;
        }
        let (x, y) = pointer_point(&ev);
        sketch.update(|s| {
            s.extend_stroke(x, y);
        });
    };

    let on_pointer_end = move |_ev: leptos::ev::PointerEvent| {
        if sketch.with_untracked(|s| s.drawing) {
            sketch.update(|s| s.end_stroke());
        }
    };

    view! {
        <div class="sketch-pad">
            <canvas
                class="sketch-pad__canvas"
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointerleave=on_pointer_end
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="sketch-pad__actions">
                <button class="btn" on:click=move |_| handles.save_sketch()>
                    "Save Sketch"
                </button>
                <button class="btn" on:click=move |_| handles.clear_sketch()>
                    "Clear"
                </button>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn paint(canvas: &web_sys::HtmlCanvasElement, sketch: &SketchState) {
    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for stroke in &sketch.lines {
        let Some((first, rest)) = stroke.points.split_first() else {
            continue;
        };
        if rest.is_empty() {
            // A tap leaves a dot.
            ctx.set_fill_style_str(&stroke.brush_color);
            ctx.begin_path();
            if ctx
                .arc(first.x, first.y, stroke.brush_radius, 0.0, std::f64::consts::TAU)
                .is_ok()
            {
                ctx.fill();
            }
            continue;
        }
        ctx.set_stroke_style_str(&stroke.brush_color);
        ctx.set_line_width(stroke.brush_radius * 2.0);
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in rest {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();
    }
}
