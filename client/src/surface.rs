use leptos::prelude::*;

use lighthouse_shared::places::{PlaceLabel, PlaceLabelLayer};
use lighthouse_shared::{
    FeatureCollection, IconSpec, LatLng, LatLngBounds, LighthouseLayer, LoadSummary, MapSurface,
    MarkerEvent, MarkerId,
};

use crate::app::canvas_dimensions;
use crate::viewport::Viewport;

/// A lighthouse marker as the DOM layer draws it. The icon is swapped, never edited.
#[derive(Clone)]
pub struct RenderedMarker {
    pub id: MarkerId,
    pub position: LatLng,
    pub icon: RwSignal<IconSpec>,
    pub popup_html: String,
}

/// Everything the map UI shares, owned by `App` and handed out through context.
#[derive(Clone, Copy)]
pub struct MapContext {
    pub viewport: RwSignal<Viewport>,
    pub screen: RwSignal<(f64, f64)>,
    pub markers: RwSignal<Vec<RenderedMarker>>,
    pub open_popup: RwSignal<Option<MarkerId>>,
    pub place_labels: RwSignal<Vec<PlaceLabel>>,
    layer: StoredValue<LighthouseLayer>,
    places: StoredValue<PlaceLabelLayer>,
}

impl MapContext {
    pub fn new() -> Self {
        Self {
            viewport: RwSignal::new(Viewport::default()),
            screen: RwSignal::new(canvas_dimensions()),
            markers: RwSignal::new(Vec::new()),
            open_popup: RwSignal::new(None),
            place_labels: RwSignal::new(Vec::new()),
            layer: StoredValue::new(LighthouseLayer::new()),
            places: StoredValue::new(PlaceLabelLayer::new()),
        }
    }

    /// Run one marker event through the lighthouse layer and push the new icons to the DOM.
    pub fn dispatch(self, event: MarkerEvent) {
        let mut surface = self;
        self.layer.update_value(|layer| {
            layer.apply(&mut surface, event);
        });
    }

    /// Hand a freshly fetched dataset to the lighthouse layer.
    pub fn populate(self, collection: &FeatureCollection) -> LoadSummary {
        let mut surface = self;
        let mut summary = LoadSummary::default();
        self.layer.update_value(|layer| {
            summary = layer.populate(&mut surface, collection);
        });
        summary
    }

    pub fn refresh_places(self, zoom: f64) {
        let mut labels = Vec::new();
        self.places.update_value(|places| {
            labels = places.refresh(zoom).to_vec();
        });
        self.place_labels.set(labels);
    }

    pub fn lighthouse_bounds(self) -> Option<LatLngBounds> {
        self.layer.with_value(|layer| layer.bounds())
    }

    pub fn marker_popup(self, id: MarkerId) -> Option<(LatLng, IconSpec, String)> {
        self.markers.with(|markers| {
            markers
                .get(id.0)
                .map(|m| (m.position, m.icon.get(), m.popup_html.clone()))
        })
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for MapContext {
    fn zoom(&self) -> f64 {
        self.viewport.with_untracked(|vp| vp.zoom_f64())
    }

    fn add_marker(&mut self, position: LatLng, icon: IconSpec, popup_html: String) -> MarkerId {
        let mut id = MarkerId(0);
        self.markers.update(|markers| {
            id = MarkerId(markers.len());
            markers.push(RenderedMarker {
                id,
                position,
                icon: RwSignal::new(icon),
                popup_html,
            });
        });
        id
    }

    fn set_icon(&mut self, id: MarkerId, icon: IconSpec) {
        self.markers.with_untracked(|markers| {
            if let Some(marker) = markers.get(id.0) {
                marker.icon.set(icon);
            }
        });
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: (f64, f64)) {
        let (w, h) = self.screen.get_untracked();
        self.viewport.update(|vp| vp.fit_bounds(bounds, padding, w, h));
    }
}
