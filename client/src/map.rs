use leptos::prelude::*;
use web_sys::{MouseEvent, PointerEvent, WheelEvent};

use lighthouse_shared::MarkerEvent;
use lighthouse_shared::places::PlaceLabel;

use crate::app::ShowPlaceLabels;
use crate::config::{WATERCOLOR, WHEEL_ZOOM_INTERVAL_MS};
use crate::surface::{MapContext, RenderedMarker};
use crate::tiles::TileLayer;

/// Pointer travel (px) before a press turns into a drag.
const DRAG_THRESHOLD_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    pressed: bool,
    moved: bool,
    start: (f64, f64),
    last: (f64, f64),
}

// `leptos::prelude` brings its own `style` method, so go through `HtmlElement`.
fn set_cursor(el: &web_sys::HtmlElement, cursor: &str) {
    web_sys::HtmlElement::style(el).set_property("cursor", cursor).ok();
}

/// The slippy map: watercolor basemap, place labels, lighthouse markers and the open popup.
#[component]
pub fn MapPane() -> impl IntoView {
    let ctx: MapContext = expect_context();
    let ShowPlaceLabels(show_labels) = expect_context();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let drag = StoredValue::new(DragState::default());
    let last_wheel_at = StoredValue::new(0.0f64);

    let local_point = move |client_x: f64, client_y: f64| {
        container_ref
            .get_untracked()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                (client_x - rect.left(), client_y - rect.top())
            })
            .unwrap_or((client_x, client_y))
    };

    let on_wheel = move |e: WheelEvent| {
        e.prevent_default();
        let delta = e.delta_y();
        if delta == 0.0 {
            return;
        }
        let now = js_sys::Date::now();
        if now - last_wheel_at.get_value() < WHEEL_ZOOM_INTERVAL_MS {
            return;
        }
        last_wheel_at.set_value(now);

        let (x, y) = local_point(e.client_x() as f64, e.client_y() as f64);
        let (w, h) = ctx.screen.get_untracked();
        let steps = if delta < 0.0 { 1 } else { -1 };
        ctx.viewport.update(|vp| {
            vp.zoom_at(steps, x, y, w, h);
        });
    };

    let on_pointer_down = move |e: PointerEvent| {
        if e.button() != 0 {
            return;
        }
        let at = (e.client_x() as f64, e.client_y() as f64);
        drag.set_value(DragState {
            pressed: true,
            moved: false,
            start: at,
            last: at,
        });
    };

    let on_pointer_move = move |e: PointerEvent| {
        let mut state = drag.get_value();
        if !state.pressed {
            return;
        }
        let at = (e.client_x() as f64, e.client_y() as f64);
        if !state.moved {
            let dx = at.0 - state.start.0;
            let dy = at.1 - state.start.1;
            if dx.hypot(dy) < DRAG_THRESHOLD_PX {
                return;
            }
            state.moved = true;
            // Capture only once dragging, so plain clicks still reach markers.
            if let Some(el) = container_ref.get_untracked() {
                el.set_pointer_capture(e.pointer_id()).ok();
                set_cursor(&el, "grabbing");
            }
        }
        let (dx, dy) = (at.0 - state.last.0, at.1 - state.last.1);
        state.last = at;
        drag.set_value(state);
        ctx.viewport.update(|vp| vp.pan(dx, dy));
    };

    let on_pointer_up = move |_: PointerEvent| {
        drag.update_value(|state| state.pressed = false);
        if let Some(el) = container_ref.get_untracked() {
            set_cursor(&el, "grab");
        }
    };

    // Clicking the bare map closes the popup, unless the click ended a drag.
    let on_click = move |_: MouseEvent| {
        if !drag.get_value().moved {
            ctx.open_popup.set(None);
        }
    };

    view! {
        <div
            node_ref=container_ref
            class="map-pane"
            style="position: absolute; inset: 0; overflow: hidden; cursor: grab; touch-action: none; background: #f3ead7;"
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:click=on_click
        >
            <TileLayer source=WATERCOLOR viewport=ctx.viewport size=ctx.screen />
            <Show when=move || show_labels.get()>
                <PlaceLabels />
            </Show>
            <div class="marker-pane" style="position: absolute; inset: 0;">
                <For
                    each=move || ctx.markers.get()
                    key=|marker| marker.id
                    children=move |marker| view! { <LighthouseMarker marker=marker drag=drag /> }
                />
            </div>
            <Popup />
        </div>
    }
}

#[component]
fn PlaceLabels() -> impl IntoView {
    let ctx: MapContext = expect_context();

    view! {
        <div class="place-pane" style="position: absolute; inset: 0; pointer-events: none;">
            <For
                each=move || ctx.place_labels.get()
                key=|label| label.name
                children=move |label: PlaceLabel| {
                    let style = move || {
                        let (w, h) = ctx.screen.get();
                        let (x, y) = ctx.viewport.with(|vp| vp.latlng_to_screen(label.position, w, h));
                        format!("position: absolute; left: {x:.0}px; top: {y:.0}px; width: 1px; height: 1px;")
                    };
                    view! { <div class=label.class_name style=style>{label.name}</div> }
                }
            />
        </div>
    }
}

#[component]
fn LighthouseMarker(marker: RenderedMarker, drag: StoredValue<DragState>) -> impl IntoView {
    let ctx: MapContext = expect_context();
    let id = marker.id;
    let icon = marker.icon;
    let position = marker.position;

    let style = move || {
        let (w, h) = ctx.screen.get();
        let (x, y) = ctx.viewport.with(|vp| vp.latlng_to_screen(position, w, h));
        icon.with(|icon| {
            format!(
                "position: absolute; left: {:.1}px; top: {:.1}px; width: {size}px; height: {size}px; cursor: pointer;",
                x - icon.anchor.0,
                y - icon.anchor.1,
                size = icon.size,
            )
        })
    };

    view! {
        <div
            class=move || icon.with(|icon| format!("lighthouse-marker {}", icon.class_name))
            style=style
            inner_html=move || icon.with(|icon| icon.html.clone())
            on:mouseenter=move |_| ctx.dispatch(MarkerEvent::PointerEnter(id))
            on:mouseleave=move |_| ctx.dispatch(MarkerEvent::PointerLeave(id))
            on:click=move |e: MouseEvent| {
                e.stop_propagation();
                if !drag.get_value().moved {
                    ctx.open_popup.set(Some(id));
                }
            }
        />
    }
}

/// Info card anchored above the clicked marker.
#[component]
fn Popup() -> impl IntoView {
    let ctx: MapContext = expect_context();

    let card = move || {
        let id = ctx.open_popup.get()?;
        let (position, icon, html) = ctx.marker_popup(id)?;
        let (w, h) = ctx.screen.get();
        let (x, y) = ctx.viewport.with(|vp| vp.latlng_to_screen(position, w, h));
        let left = x + icon.popup_anchor.0;
        let top = y + icon.popup_anchor.1;

        Some(view! {
            <div
                class="popup"
                style=format!("position: absolute; left: {left:.1}px; top: {top:.1}px; transform: translate(-50%, calc(-100% - 8px)); z-index: 4; cursor: auto;")
                on:pointerdown=|e| e.stop_propagation()
                on:click=|e| e.stop_propagation()
                on:wheel=|e| e.stop_propagation()
            >
                <button
                    class="popup-close"
                    title="Close"
                    on:click=move |_| ctx.open_popup.set(None)
                >
                    "\u{00D7}"
                </button>
                <div class="popup-content" inner_html=html />
            </div>
        })
    };

    view! { {card} }
}
