use std::fmt::Write;

use crate::era::{EraBucket, extract_year};
use crate::geojson::LighthouseProperties;

pub const UNNAMED_LIGHTHOUSE: &str = "Unnamed lighthouse";

/// Escape text for interpolation into HTML content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Only absolute http(s) URLs become links.
fn safe_image_url(raw: &str) -> Option<url::Url> {
    let parsed = url::Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Info card shown when a lighthouse marker is clicked.
pub fn popup_html(props: &LighthouseProperties) -> String {
    let name = props.label.as_deref().unwrap_or(UNNAMED_LIGHTHOUSE);
    let year = extract_year(props.inception.as_deref());
    let bucket = EraBucket::from_year(year);

    let mut html = String::with_capacity(256);
    let _ = write!(
        html,
        r#"<div class="popup-card"><div class="popup-title">{}</div>"#,
        html_escape(name)
    );
    if let Some(admin) = props.admin_label.as_deref() {
        let _ = write!(
            html,
            r#"<div class="popup-row"><b>Area:</b> {}</div>"#,
            html_escape(admin)
        );
    }
    match year {
        Some(year) => {
            let _ = write!(
                html,
                r#"<div class="popup-row"><b>Built:</b> {year} ({bucket})</div>"#
            );
        }
        None => html.push_str(r#"<div class="popup-row"><b>Built:</b> Unknown</div>"#),
    }
    if let Some(image) = props.image.as_deref().and_then(safe_image_url) {
        let _ = write!(
            html,
            r#"<div class="popup-link"><a href="{}" target="_blank" rel="noopener">View image</a></div>"#,
            html_escape(image.as_str())
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Popup markup reduced to its visible text, with entities left encoded.
    fn visible_text(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    fn props(
        label: Option<&str>,
        admin: Option<&str>,
        inception: Option<&str>,
        image: Option<&str>,
    ) -> LighthouseProperties {
        LighthouseProperties {
            label: label.map(str::to_string),
            admin_label: admin.map(str::to_string),
            inception: inception.map(str::to_string),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn missing_inception_renders_unknown() {
        let html = popup_html(&props(Some("Palmido"), None, None, None));
        assert!(visible_text(&html).contains("Built: Unknown"));
        assert!(!html.contains("Area:"));
        assert!(!html.contains("View image"));
    }

    #[test]
    fn inception_renders_year_and_era() {
        let html = popup_html(&props(Some("Eocheongdo"), None, Some("circa 1850 AD"), None));
        assert!(visible_text(&html).contains("Built: 1850 (Before 1900)"));
    }

    #[test]
    fn full_card() {
        let html = popup_html(&props(
            Some("Yeongdo"),
            Some("Yeongdo District"),
            Some("1906"),
            Some("https://commons.wikimedia.org/wiki/Special:FilePath/Yeongdo.jpg"),
        ));
        let text = visible_text(&html);
        assert!(text.starts_with("Yeongdo"));
        assert!(text.contains("Area: Yeongdo District"));
        assert!(text.contains("Built: 1906 (1900s)"));
        assert!(text.contains("View image"));
        assert!(html.contains(
            r#"href="https://commons.wikimedia.org/wiki/Special:FilePath/Yeongdo.jpg" target="_blank" rel="noopener""#
        ));
    }

    #[test]
    fn unnamed_fallback() {
        let html = popup_html(&LighthouseProperties::default());
        assert!(visible_text(&html).starts_with(UNNAMED_LIGHTHOUSE));
    }

    #[test]
    fn property_markup_is_escaped() {
        let html = popup_html(&props(
            Some("<img src=x onerror=alert(1)>"),
            Some("Tom & Jerry's \"bay\""),
            None,
            None,
        ));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tom &amp; Jerry&#39;s &quot;bay&quot;"));
    }

    #[test]
    fn only_web_urls_are_linked() {
        let js = popup_html(&props(None, None, None, Some("javascript:alert(1)")));
        assert!(!js.contains("View image"));
        let relative = popup_html(&props(None, None, None, Some("images/a.jpg")));
        assert!(!relative.contains("View image"));
        let quoted = popup_html(&props(None, None, None, Some("https://a.org/x\"y.jpg")));
        assert!(quoted.contains("View image"));
        assert!(!quoted.contains("x\"y"));
    }
}
