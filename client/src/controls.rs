#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use leptos::prelude::*;

use crate::config::{MAX_ZOOM, MIN_ZOOM, SCALE_MAX_WIDTH_PX, WATERCOLOR};
use crate::surface::MapContext;

const CONTROL_STYLE: &str = "background: rgba(253,246,227,0.92); border: 1px solid rgba(58,36,20,0.35); border-radius: 4px; box-shadow: 0 1px 6px rgba(0,0,0,0.25);";

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub label: String,
    pub width_px: f64,
}

/// Round down to 1, 2, 3, 5 or 10 times a power of ten.
pub fn round_scale_meters(meters: f64) -> f64 {
    if meters < 1.0 {
        return 1.0;
    }
    let pow10 = 10f64.powi(meters.log10().floor() as i32);
    let d = meters / pow10;
    let d = if d >= 10.0 {
        10.0
    } else if d >= 5.0 {
        5.0
    } else if d >= 3.0 {
        3.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };
    pow10 * d
}

/// Metric scale bar no wider than `max_width_px`.
pub fn scale_bar(meters_per_px: f64, max_width_px: f64) -> ScaleBar {
    let max_meters = meters_per_px * max_width_px;
    let meters = round_scale_meters(max_meters);
    let width_px = if max_meters > 0.0 {
        (max_width_px * meters / max_meters).round()
    } else {
        0.0
    };
    let label = if meters < 1000.0 {
        format!("{meters} m")
    } else {
        format!("{} km", meters / 1000.0)
    };
    ScaleBar { label, width_px }
}

/// Zoom in/out buttons, top-right.
#[component]
pub fn ZoomControl() -> impl IntoView {
    let ctx: MapContext = expect_context();
    let at_max = move || ctx.viewport.with(|vp| vp.zoom >= MAX_ZOOM);
    let at_min = move || ctx.viewport.with(|vp| vp.zoom <= MIN_ZOOM);

    let zoom_in = move |_| {
        let (w, h) = ctx.screen.get_untracked();
        ctx.viewport.update(|vp| {
            vp.zoom_in(w, h);
        });
    };
    let zoom_out = move |_| {
        let (w, h) = ctx.screen.get_untracked();
        ctx.viewport.update(|vp| {
            vp.zoom_out(w, h);
        });
    };

    view! {
        <div
            class="zoom-control"
            style=format!("position: absolute; top: 12px; right: 12px; z-index: 6; display: flex; flex-direction: column; overflow: hidden; {CONTROL_STYLE}")
            on:pointerdown=|e| e.stop_propagation()
            on:click=|e| e.stop_propagation()
        >
            <button class="zoom-in" title="Zoom in" disabled=at_max on:click=zoom_in>"+"</button>
            <button class="zoom-out" title="Zoom out" disabled=at_min on:click=zoom_out>"\u{2212}"</button>
        </div>
    }
}

/// Metric scale, bottom-right.
#[component]
pub fn ScaleControl() -> impl IntoView {
    let ctx: MapContext = expect_context();
    let bar = Memo::new(move |_| {
        ctx.viewport
            .with(|vp| scale_bar(vp.meters_per_pixel(), SCALE_MAX_WIDTH_PX))
    });

    view! {
        <div
            class="scale-control"
            style="position: absolute; right: 12px; bottom: 26px; z-index: 6; pointer-events: none;"
        >
            <div
                style:width=move || format!("{}px", bar.get().width_px)
                style="border: 2px solid #3a2414; border-top: none; padding: 0 4px; font: 11px/1.4 'Georgia', serif; color: #3a2414; background: rgba(253,246,227,0.7); white-space: nowrap; box-sizing: border-box;"
            >
                {move || bar.get().label}
            </div>
        </div>
    }
}

#[component]
pub fn Attribution() -> impl IntoView {
    view! {
        <div
            class="attribution"
            style="position: absolute; right: 0; bottom: 0; z-index: 6; padding: 1px 6px; font: 11px/1.5 system-ui, sans-serif; color: #333; background: rgba(255,255,255,0.75);"
            on:pointerdown=|e| e.stop_propagation()
            inner_html=WATERCOLOR.attribution
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_down_to_friendly_numbers() {
        assert_eq!(round_scale_meters(0.4), 1.0);
        assert_eq!(round_scale_meters(1.0), 1.0);
        assert_eq!(round_scale_meters(1.9), 1.0);
        assert_eq!(round_scale_meters(27.0), 20.0);
        assert_eq!(round_scale_meters(3700.0), 3000.0);
        assert_eq!(round_scale_meters(64_000.0), 50_000.0);
        assert_eq!(round_scale_meters(1000.0), 1000.0);
    }

    #[test]
    fn kilometre_scale() {
        let bar = scale_bar(37.0, 100.0);
        assert_eq!(bar.label, "3 km");
        assert_eq!(bar.width_px, 81.0);
    }

    #[test]
    fn metre_scale() {
        let bar = scale_bar(0.5, 100.0);
        assert_eq!(bar.label, "50 m");
        assert_eq!(bar.width_px, 100.0);
    }

    #[test]
    fn exact_power_of_ten_fills_the_bar() {
        let bar = scale_bar(100.0, 100.0);
        assert_eq!(bar.label, "10 km");
        assert_eq!(bar.width_px, 100.0);
    }
}
