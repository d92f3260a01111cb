const COMPASS_SELECTOR: &str = ".compass-svg";

/// Give the page's compass rose its ring and star layers if the markup lacks them.
pub fn ensure_ornaments() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(compass) = document.query_selector(COMPASS_SELECTOR).ok().flatten() else {
        return;
    };
    if compass.query_selector("span").ok().flatten().is_some() {
        return;
    }

    for tag in ["span", "i"] {
        if let Ok(layer) = document.create_element(tag) {
            let _ = compass.append_child(&layer);
        }
    }
}
