//! Spark lifecycle: find-or-create, styling and destruction, keyed by the
//! unordered contact pair a spark joins.

use std::collections::HashMap;

use crate::geometry::{compute_transform, format_measurement};
use crate::model::{ContactPoint, DisplayMode, SparkKey, SparkStyle};
use crate::surface::SparkSurface;

/// One registered spark. `style` is `None` until the first styling pass; the
/// surface keeps the visual hidden in that state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spark {
    pub style: Option<SparkStyle>,
}

/// Owns every live spark and the surface that renders them.
pub struct SparkRegistry<S: SparkSurface> {
    sparks: HashMap<SparkKey, Spark>,
    surface: S,
}

impl<S: SparkSurface> SparkRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            sparks: HashMap::new(),
            surface,
        }
    }

    /// Registers `key` if it is new, mounting a hidden visual. Idempotent.
    pub fn find_or_create(&mut self, key: &SparkKey) {
        if !self.sparks.contains_key(key) {
            self.sparks.insert(key.clone(), Spark::default());
            self.surface.mount(key);
        }
    }

    /// Recomputes the spark's transform and label from the two endpoint
    /// positions and pushes it to the surface, along with a fresh cosmetic
    /// jitter baseline. The key must already be registered.
    pub fn apply_style(
        &mut self,
        key: &SparkKey,
        p1: ContactPoint,
        p2: ContactPoint,
        mode: DisplayMode,
    ) {
        let spark = self
            .sparks
            .get_mut(key)
            .expect("apply_style for unregistered spark key");
        let transform = compute_transform(p1, p2);
        let style = SparkStyle {
            anchor: transform.anchor,
            length: transform.length,
            angle_deg: transform.angle_deg,
            label: format_measurement(transform.length, mode),
        };
        self.surface.restyle(key, &style);
        self.surface.refresh_jitter(key);
        spark.style = Some(style);
    }

    /// Drops the spark and its visual. An unknown key means the tracker's
    /// pair bookkeeping has diverged, which is a bug, not a runtime
    /// condition: fail fast.
    pub fn destroy(&mut self, key: &SparkKey) {
        self.sparks
            .remove(key)
            .expect("destroy for unregistered spark key");
        self.surface.unmount(key);
    }

    /// Re-randomizes every spark's jitter offset (decoration tick).
    pub fn refresh_decoration(&mut self) {
        for key in self.sparks.keys() {
            self.surface.refresh_jitter(key);
        }
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn get(&self, key: &SparkKey) -> Option<&Spark> {
        self.sparks.get(key)
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}
