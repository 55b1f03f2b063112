//! Per-vertex paint weights.
//!
//! Weights are queried by (geometry index, vertex index), the same key
//! a host uses for painted deformer weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Source of per-vertex deformer weights in `[0, 1]`.
pub trait WeightSource: Send + Sync {
    /// Weight of `vertex` on the geometry at `geo_index`.
    fn weight(&self, geo_index: u32, vertex: usize) -> f32;

    /// Number of explicitly stored weights for `geo_index`, if known.
    ///
    /// Used to catch weight maps painted on a different mesh.
    fn stored_len(&self, _geo_index: u32) -> Option<usize> {
        None
    }
}

/// The same weight for every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformWeight(pub f32);

impl Default for UniformWeight {
    fn default() -> Self {
        Self(1.0)
    }
}

impl WeightSource for UniformWeight {
    fn weight(&self, _geo_index: u32, _vertex: usize) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Painted weight maps, one per geometry index.
///
/// Geometry without a painted map weighs 1.0 everywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintedWeights {
    maps: BTreeMap<u32, Vec<f32>>,
}

impl PaintedWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight map for geometry 0.
    pub fn single(values: Vec<f32>) -> Self {
        let mut weights = Self::new();
        weights.set(0, values);
        weights
    }

    /// Replace the weight map of `geo_index`.
    pub fn set(&mut self, geo_index: u32, values: Vec<f32>) {
        self.maps.insert(geo_index, values);
    }

    /// Paint a single vertex.
    ///
    /// Extends the map with 1.0 entries when `vertex` is past its end.
    pub fn paint(&mut self, geo_index: u32, vertex: usize, value: f32) {
        let map = self.maps.entry(geo_index).or_default();
        if vertex >= map.len() {
            map.resize(vertex + 1, 1.0);
        }
        map[vertex] = value;
    }

    pub fn get(&self, geo_index: u32) -> Option<&[f32]> {
        self.maps.get(&geo_index).map(Vec::as_slice)
    }
}

impl WeightSource for PaintedWeights {
    fn weight(&self, geo_index: u32, vertex: usize) -> f32 {
        self.maps
            .get(&geo_index)
            .and_then(|map| map.get(vertex))
            .map_or(1.0, |w| w.clamp(0.0, 1.0))
    }

    fn stored_len(&self, geo_index: u32) -> Option<usize> {
        self.maps.get(&geo_index).map(Vec::len)
    }
}
