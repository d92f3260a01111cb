use crate::era::EraBucket;
use crate::palette::{EraStyle, style_for};

pub const BASE_ICON_SIZE: f64 = 26.0;
pub const MIN_ICON_SIZE: f64 = 20.0;
pub const MAX_ICON_SIZE: f64 = 40.0;
pub const HOVER_GROWTH: f64 = 5.0;
const SIZE_PER_ZOOM: f64 = 1.1;
const REFERENCE_ZOOM: f64 = 7.0;

/// Immutable marker icon. Replaced wholesale whenever zoom or hover changes.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub class_name: String,
    pub html: String,
    pub size: f64,
    /// Offset from the icon's top-left corner to the point that sits on the map position.
    pub anchor: (f64, f64),
    /// Offset from the anchor to where an attached popup opens.
    pub popup_anchor: (f64, f64),
}

/// Gentle zoom scaling, clamped to a readable range.
pub fn size_for_zoom(zoom: f64) -> f64 {
    (BASE_ICON_SIZE + (zoom - REFERENCE_ZOOM) * SIZE_PER_ZOOM).clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
}

/// Hover growth is applied after the zoom clamp.
pub fn icon_size(zoom: f64, hover: bool) -> f64 {
    size_for_zoom(zoom) + if hover { HOVER_GROWTH } else { 0.0 }
}

/// Lighthouse SVG with a pulsing glow and light rays, animated by CSS.
/// `delay` lands in the `--d` custom property consumed by the stylesheet.
pub fn lighthouse_svg(colors: EraStyle, size: f64, hover: bool, delay: &str) -> String {
    let cls = if hover { "lh-icon hover" } else { "lh-icon" };
    let EraStyle { fill, stroke } = colors;
    let stroke_w = 2;

    format!(
        r#"<div class="lh-wrap" style="--d:{delay}">
  <svg class="{cls}" width="{size}" height="{size}" viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg">
    <circle class="pulse" cx="32" cy="18" r="14" fill="rgba(255,255,255,0.65)" />
    <path class="ray" d="M10 22 L20 26" stroke="rgba(255,255,255,0.95)" stroke-width="3" stroke-linecap="round"/>
    <path class="ray" d="M54 22 L44 26" stroke="rgba(255,255,255,0.95)" stroke-width="3" stroke-linecap="round"/>
    <path class="ray" d="M8 30 L20 30" stroke="rgba(255,255,255,0.70)" stroke-width="3" stroke-linecap="round"/>
    <path class="ray" d="M56 30 L44 30" stroke="rgba(255,255,255,0.70)" stroke-width="3" stroke-linecap="round"/>
    <path d="M28 10 h8 l2 10 h-12 z" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_w}" />
    <path d="M24 20 h16 l-4 34 h-8 z" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_w}" />
    <path d="M20 54 h24" stroke="{stroke}" stroke-width="3" stroke-linecap="round" />
    <rect x="30" y="28" width="4" height="6" fill="rgba(253,246,227,0.95)"/>
    <rect x="30" y="40" width="4" height="6" fill="rgba(253,246,227,0.95)"/>
    <path d="M24 10 L32 6 L40 10" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_w}" />
  </svg>
</div>"#
    )
}

pub fn icon_for(bucket: EraBucket, zoom: f64, hover: bool, delay: &str) -> IconSpec {
    let size = icon_size(zoom, hover);
    IconSpec {
        class_name: String::new(),
        html: lighthouse_svg(style_for(bucket), size, hover, delay),
        size,
        anchor: (size / 2.0, size),
        popup_anchor: (0.0, -size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    #[test]
    fn size_follows_zoom_within_clamp() {
        assert_close(size_for_zoom(7.0), 26.0);
        assert_close(size_for_zoom(8.0), 27.1);
        assert_close(size_for_zoom(20.0), 40.0);
        assert_close(size_for_zoom(0.0), 20.0);
    }

    #[test]
    fn size_is_monotonic_in_zoom() {
        let mut last = size_for_zoom(0.0);
        for z in 1..=22 {
            let s = size_for_zoom(z as f64);
            assert!(s >= last, "size shrank at zoom {z}");
            assert!((MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&s));
            last = s;
        }
    }

    #[test]
    fn hover_adds_five_after_clamp() {
        assert_close(icon_size(7.0, true), 31.0);
        assert_close(icon_size(20.0, true), 45.0);
        assert_close(icon_size(0.0, true), 25.0);
        assert_close(icon_size(0.0, false), 20.0);
    }

    #[test]
    fn icon_carries_style_delay_and_anchors() {
        let icon = icon_for(EraBucket::Before1900, 7.0, false, "1.25s");
        assert_close(icon.size, 26.0);
        assert_eq!(icon.anchor, (13.0, 26.0));
        assert_eq!(icon.popup_anchor, (0.0, -26.0));
        assert!(icon.class_name.is_empty());
        assert!(icon.html.contains("--d:1.25s"));
        assert!(icon.html.contains(r##"fill="#7a4e2d""##));
        assert!(icon.html.contains(r##"stroke="#3a2414""##));
        assert!(icon.html.contains(r#"width="26" height="26""#));
        assert!(icon.html.contains(r#"class="lh-icon""#));
    }

    #[test]
    fn hovered_icon_is_larger_and_flagged() {
        let icon = icon_for(EraBucket::Modern, 7.0, true, "0.10s");
        assert!(icon.html.contains(r#"class="lh-icon hover""#));
        assert!(icon.html.contains(r#"width="31""#));
        assert_eq!(icon.anchor, (15.5, 31.0));
    }
}
