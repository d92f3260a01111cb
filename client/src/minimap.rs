#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::app::MinimapMinimized;
use crate::config::{MINIMAP_SIZE_PX, MINIMAP_ZOOM_OFFSET, OPENSTREETMAP};
use crate::surface::MapContext;
use crate::tiles::TileLayer;
use crate::viewport::Viewport;

/// The inset follows the main map's centre, a fixed number of levels further out.
pub fn minimap_viewport(main: &Viewport) -> Viewport {
    Viewport {
        center: main.center,
        zoom: main
            .zoom
            .saturating_sub(MINIMAP_ZOOM_OFFSET)
            .min(OPENSTREETMAP.max_zoom),
    }
}

/// Screen rectangle `(left, top, width, height)` of the main view inside the inset.
pub fn aiming_rect(main: &Viewport, main_w: f64, main_h: f64) -> (f64, f64, f64, f64) {
    let mini = minimap_viewport(main);
    let bounds = main.visible_bounds(main_w, main_h);
    let (x1, y1) = mini.latlng_to_screen(bounds.north_west(), MINIMAP_SIZE_PX, MINIMAP_SIZE_PX);
    let (x2, y2) = mini.latlng_to_screen(bounds.south_east(), MINIMAP_SIZE_PX, MINIMAP_SIZE_PX);
    (x1, y1, (x2 - x1).max(1.0), (y2 - y1).max(1.0))
}

#[component]
pub fn Minimap() -> impl IntoView {
    let ctx: MapContext = expect_context();
    let MinimapMinimized(minimized) = expect_context();

    let mini_viewport = Signal::derive(move || ctx.viewport.with(minimap_viewport));
    let mini_size = Signal::derive(|| (MINIMAP_SIZE_PX, MINIMAP_SIZE_PX));

    let rect_style = move || {
        let (w, h) = ctx.screen.get();
        let (x, y, rw, rh) = ctx.viewport.with(|vp| aiming_rect(vp, w, h));
        format!(
            "position: absolute; left: {x:.1}px; top: {y:.1}px; width: {rw:.1}px; height: {rh:.1}px; border: 2px solid #ff7800; background: rgba(255,120,0,0.12); box-sizing: border-box; pointer-events: none;"
        )
    };

    // Click to navigate
    let on_click = move |e: MouseEvent| {
        if minimized.get_untracked() {
            return;
        }
        let x = e.offset_x() as f64;
        let y = e.offset_y() as f64;
        let target = mini_viewport
            .get_untracked()
            .screen_to_latlng(x, y, MINIMAP_SIZE_PX, MINIMAP_SIZE_PX);
        ctx.viewport.update(|vp| vp.center = target);
    };

    let size_px = move || {
        if minimized.get() {
            "19px".to_string()
        } else {
            format!("{MINIMAP_SIZE_PX}px")
        }
    };

    view! {
        <div
            class="minimap"
            style:width=size_px
            style:height=size_px
            style="position: absolute; right: 12px; bottom: 52px; z-index: 5; background: #fff; border: 2px solid rgba(58,36,20,0.45); border-radius: 3px; box-shadow: 0 2px 10px rgba(0,0,0,0.3); overflow: hidden; transition: width 0.2s, height 0.2s;"
            on:pointerdown=|e| e.stop_propagation()
            on:wheel=|e| e.stop_propagation()
        >
            <Show when=move || !minimized.get()>
                <div
                    style=format!("position: absolute; inset: 0; width: {MINIMAP_SIZE_PX}px; height: {MINIMAP_SIZE_PX}px; cursor: pointer;")
                    on:click=on_click
                >
                    <TileLayer source=OPENSTREETMAP viewport=mini_viewport size=mini_size />
                    <div style=rect_style />
                </div>
            </Show>
            <button
                class="minimap-toggle"
                title=move || if minimized.get() { "Show MiniMap" } else { "Hide MiniMap" }
                style="position: absolute; right: 0; bottom: 0; width: 19px; height: 19px; padding: 0; border: none; background: rgba(253,246,227,0.9); cursor: pointer; font-size: 11px; line-height: 19px; color: #3a2414;"
                on:click=move |e: MouseEvent| {
                    e.stop_propagation();
                    minimized.update(|v| *v = !*v);
                }
            >
                {move || if minimized.get() { "\u{25E4}" } else { "\u{25E2}" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_sits_five_levels_out() {
        let main = Viewport::default();
        let mini = minimap_viewport(&main);
        assert_eq!(mini.zoom, main.zoom - MINIMAP_ZOOM_OFFSET);
        assert_eq!(mini.center, main.center);

        let shallow = Viewport {
            zoom: 3,
            ..Viewport::default()
        };
        assert_eq!(minimap_viewport(&shallow).zoom, 0);
    }

    #[test]
    fn aiming_rect_is_centred_and_scaled() {
        let main = Viewport::default();
        let (x, y, w, h) = aiming_rect(&main, 1280.0, 640.0);
        // Five levels out shrinks the main view by 2^5.
        assert!((w - 40.0).abs() < 0.5, "width {w}");
        assert!((h - 20.0).abs() < 0.5, "height {h}");
        assert!((x + w / 2.0 - MINIMAP_SIZE_PX / 2.0).abs() < 0.5);
        assert!((y + h / 2.0 - MINIMAP_SIZE_PX / 2.0).abs() < 0.5);
    }
}
