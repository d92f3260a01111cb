//! Lighthouse layer: turns dataset features into markers and keeps their
//! icons in step with zoom and hover.
//!
//! The layer never touches the renderer directly. It talks to a [`MapSurface`],
//! which owns marker placement, and keeps per-marker state in its own
//! [`MarkerTable`] keyed by the ids the surface hands out.

use crate::delay::delay_from_coords;
use crate::era::{EraBucket, extract_year};
use crate::geo::{LatLng, LatLngBounds};
use crate::geojson::FeatureCollection;
use crate::icon::IconSpec;
use crate::marker::{MarkerId, MarkerMeta, MarkerTable};
use crate::popup::popup_html;

/// Pixel padding kept around the markers when the view is fitted to them.
pub const FIT_PADDING: (f64, f64) = (30.0, 30.0);

/// The parts of a slippy map the lighthouse layer needs.
pub trait MapSurface {
    fn zoom(&self) -> f64;
    fn add_marker(&mut self, position: LatLng, icon: IconSpec, popup_html: String) -> MarkerId;
    fn set_icon(&mut self, id: MarkerId, icon: IconSpec);
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: (f64, f64));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEvent {
    PointerEnter(MarkerId),
    PointerLeave(MarkerId),
    ZoomEnd,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconUpdate {
    pub id: MarkerId,
    pub icon: IconSpec,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    pub markers: usize,
    pub skipped: usize,
    pub bounds: Option<LatLngBounds>,
}

#[derive(Debug, Clone, Default)]
pub struct LighthouseLayer {
    markers: MarkerTable,
    bounds: Option<LatLngBounds>,
}

impl LighthouseLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Extent of every marker added so far.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds
    }

    /// Add one marker per point feature, then fit the view to them.
    /// Features without a point geometry are skipped; an empty result leaves the view alone.
    pub fn populate<S: MapSurface>(
        &mut self,
        surface: &mut S,
        collection: &FeatureCollection,
    ) -> LoadSummary {
        let zoom = surface.zoom();
        let mut summary = LoadSummary::default();
        let mut positions = Vec::with_capacity(collection.features.len());

        for feature in &collection.features {
            let Some(position) = feature.point() else {
                summary.skipped += 1;
                continue;
            };
            let props = feature.properties.clone().unwrap_or_default();
            let year = extract_year(props.inception.as_deref());
            let meta = MarkerMeta::new(
                EraBucket::from_year(year),
                delay_from_coords(position.lat, position.lng),
            );

            let id = surface.add_marker(position, meta.icon(zoom), popup_html(&props));
            self.markers.insert(id, meta);
            summary.markers += 1;
            positions.push(position);
        }

        let bounds = LatLngBounds::from_points(positions);
        if let Some(b) = bounds {
            surface.fit_bounds(b, FIT_PADDING);
            match self.bounds.as_mut() {
                Some(existing) => {
                    existing.extend(b.south_west);
                    existing.extend(b.north_east);
                }
                None => self.bounds = Some(b),
            }
        }
        summary.bounds = bounds;
        summary
    }

    /// Update marker state for an event and return the icons that must be replaced.
    pub fn handle(&mut self, event: MarkerEvent, zoom: f64) -> Vec<IconUpdate> {
        match event {
            MarkerEvent::PointerEnter(id) => self.set_hover(id, true, zoom),
            MarkerEvent::PointerLeave(id) => self.set_hover(id, false, zoom),
            MarkerEvent::ZoomEnd => self
                .markers
                .iter()
                .map(|(id, meta)| IconUpdate {
                    id,
                    icon: meta.icon(zoom),
                })
                .collect(),
        }
    }

    /// [`handle`](Self::handle) at the surface's current zoom, applying the updates to it.
    pub fn apply<S: MapSurface>(&mut self, surface: &mut S, event: MarkerEvent) -> usize {
        let updates = self.handle(event, surface.zoom());
        let count = updates.len();
        for update in updates {
            surface.set_icon(update.id, update.icon);
        }
        count
    }

    fn set_hover(&mut self, id: MarkerId, hover: bool, zoom: f64) -> Vec<IconUpdate> {
        let Some(meta) = self.markers.get_mut(id) else {
            return Vec::new();
        };
        meta.hover = hover;
        vec![IconUpdate {
            id,
            icon: meta.icon(zoom),
        }]
    }
}
