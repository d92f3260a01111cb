use std::collections::BTreeMap;

use crate::era::EraBucket;
use crate::icon::{IconSpec, icon_for};

/// Handle a map surface hands out for each marker it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// Classification and interaction state kept alongside each marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerMeta {
    bucket: EraBucket,
    delay: String,
    pub hover: bool,
}

impl MarkerMeta {
    pub fn new(bucket: EraBucket, delay: String) -> Self {
        Self {
            bucket,
            delay,
            hover: false,
        }
    }

    pub fn bucket(&self) -> EraBucket {
        self.bucket
    }

    pub fn delay(&self) -> &str {
        &self.delay
    }

    pub fn icon(&self, zoom: f64) -> IconSpec {
        icon_for(self.bucket, zoom, self.hover, &self.delay)
    }
}

/// Side-table from marker handle to its metadata.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    entries: BTreeMap<MarkerId, MarkerMeta>,
}

impl MarkerTable {
    pub fn insert(&mut self, id: MarkerId, meta: MarkerMeta) {
        self.entries.insert(id, meta);
    }

    pub fn get(&self, id: MarkerId) -> Option<&MarkerMeta> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut MarkerMeta> {
        self.entries.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &MarkerMeta)> {
        self.entries.iter().map(|(id, meta)| (*id, meta))
    }
}
