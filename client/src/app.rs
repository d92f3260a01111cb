use leptos::prelude::*;
use wasm_bindgen::JsCast;

use std::cell::RefCell;

use lighthouse_shared::MarkerEvent;
use lighthouse_shared::layer::FIT_PADDING;

use crate::config::KEYBOARD_PAN_PX;
use crate::controls::{Attribution, ScaleControl, ZoomControl};
use crate::lighthouses;
use crate::map::MapPane;
use crate::minimap::Minimap;
use crate::surface::MapContext;

pub(crate) fn canvas_dimensions() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (1200.0, 800.0);
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1200.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    (w, h)
}

struct KeydownBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

struct ResizeBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn()>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

/// Newtype wrappers so the view toggles get distinct context types.
#[derive(Clone, Copy)]
pub(crate) struct MinimapMinimized(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub(crate) struct ShowPlaceLabels(pub RwSignal<bool>);

fn zoom_by(ctx: MapContext, steps: i32) {
    let (w, h) = ctx.screen.get_untracked();
    ctx.viewport.update(|vp| {
        vp.zoom_at(steps, w / 2.0, h / 2.0, w, h);
    });
}

fn fit_to_lighthouses(ctx: MapContext) {
    let Some(bounds) = ctx.lighthouse_bounds() else {
        return;
    };
    let (w, h) = ctx.screen.get_untracked();
    ctx.viewport
        .update(|vp| vp.fit_bounds(bounds, FIT_PADDING, w, h));
}

/// Root application component. Owns the map context and provides it to children.
#[component]
pub fn App() -> impl IntoView {
    let ctx = MapContext::new();
    // View toggles live for the session only.
    let minimap_minimized: RwSignal<bool> = RwSignal::new(false);
    let show_place_labels: RwSignal<bool> = RwSignal::new(true);
    let lighthouses_requested: RwSignal<bool> = RwSignal::new(false);

    provide_context(ctx);
    provide_context(MinimapMinimized(minimap_minimized));
    provide_context(ShowPlaceLabels(show_place_labels));

    // Zoom changes re-filter the place labels and rescale every lighthouse icon.
    let zoom = Memo::new(move |_| ctx.viewport.with(|vp| vp.zoom));
    Effect::new(move |prev: Option<u8>| {
        let z = zoom.get();
        ctx.refresh_places(f64::from(z));
        if prev.is_some_and(|p| p != z) {
            ctx.dispatch(MarkerEvent::ZoomEnd);
        }
        z
    });

    // Fetch the dataset once on mount
    Effect::new(move || {
        if lighthouses_requested.get_untracked() {
            return;
        }
        lighthouses_requested.set(true);
        lighthouses::load_lighthouses(ctx);
    });

    // Track window size so projections stay centred
    Effect::new(move || {
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };

        RESIZE_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "resize",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler = Closure::<dyn Fn()>::new(move || {
            ctx.screen.set(canvas_dimensions());
        });
        if window
            .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            RESIZE_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(ResizeBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    // Global keyboard shortcuts
    Effect::new(move || {
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };

        KEYDOWN_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "keydown",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                let target_tag = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|el| el.tag_name())
                    .unwrap_or_default();

                // Don't intercept when typing in an input
                if target_tag == "INPUT" || target_tag == "TEXTAREA" {
                    return;
                }

                match e.key().as_str() {
                    "Escape" => ctx.open_popup.set(None),
                    "+" | "=" => {
                        e.prevent_default();
                        zoom_by(ctx, 1);
                    }
                    "-" => {
                        e.prevent_default();
                        zoom_by(ctx, -1);
                    }
                    "ArrowLeft" => {
                        e.prevent_default();
                        ctx.viewport.update(|vp| vp.pan(KEYBOARD_PAN_PX, 0.0));
                    }
                    "ArrowRight" => {
                        e.prevent_default();
                        ctx.viewport.update(|vp| vp.pan(-KEYBOARD_PAN_PX, 0.0));
                    }
                    "ArrowUp" => {
                        e.prevent_default();
                        ctx.viewport.update(|vp| vp.pan(0.0, KEYBOARD_PAN_PX));
                    }
                    "ArrowDown" => {
                        e.prevent_default();
                        ctx.viewport.update(|vp| vp.pan(0.0, -KEYBOARD_PAN_PX));
                    }
                    "r" | "0" => fit_to_lighthouses(ctx),
                    "m" => minimap_minimized.update(|v| *v = !*v),
                    "l" => show_place_labels.update(|v| *v = !*v),
                    _ => {}
                }
            });

        if window
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            KEYDOWN_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(KeydownBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    view! {
        <div id="map" style="width: 100%; height: 100%; position: relative; overflow: hidden;">
            <MapPane />
            <ZoomControl />
            <Minimap />
            <ScaleControl />
            <Attribution />
        </div>
    }
}
