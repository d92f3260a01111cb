use wasm_bindgen_futures::spawn_local;

use lighthouse_shared::{FeatureCollection, LoadError};

use crate::compass;
use crate::config::LIGHTHOUSES_URL;
use crate::surface::MapContext;

/// Fetch the lighthouse GeoJSON once. No retry, no timeout.
pub async fn fetch_lighthouses() -> Result<FeatureCollection, LoadError> {
    let resp = gloo_net::http::Request::get(LIGHTHOUSES_URL)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    resp.json::<FeatureCollection>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}

/// Populate the lighthouse layer in the background. A failed load leaves the layer empty.
pub fn load_lighthouses(ctx: MapContext) {
    spawn_local(async move {
        let collection = match fetch_lighthouses().await {
            Ok(collection) => collection,
            Err(e) => {
                web_sys::console::error_1(&e.to_string().into());
                return;
            }
        };

        let summary = ctx.populate(&collection);
        web_sys::console::info_1(
            &format!(
                "lighthouses_loaded={} features_skipped={}",
                summary.markers, summary.skipped
            )
            .into(),
        );
        compass::ensure_ornaments();
    });
}
