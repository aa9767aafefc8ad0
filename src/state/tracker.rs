//! Contact tracking: the single owner of all touch-spark state. Every
//! platform event lands here, and the spark registry is kept in lockstep so
//! that exactly one spark exists per unordered pair of active contacts.

use std::collections::HashMap;

use crate::model::{ContactId, ContactPoint, DisplayMode, SparkKey};
use crate::state::registry::SparkRegistry;
use crate::surface::SparkSurface;

/// Top-level context object: active contacts, the spark registry and the
/// current display mode. Created once at startup and handed to the event
/// adapter; there are no module-level globals.
pub struct SparkField<S: SparkSurface> {
    contacts: HashMap<ContactId, ContactPoint>,
    sparks: SparkRegistry<S>,
    /// `None` until the startup `advance_mode` call.
    mode: Option<DisplayMode>,
}

impl<S: SparkSurface> SparkField<S> {
    pub fn new(surface: S) -> Self {
        Self {
            contacts: HashMap::new(),
            sparks: SparkRegistry::new(surface),
            mode: None,
        }
    }

    /// Registers or updates a contact and styles every spark touching it.
    /// A duplicate start for an already-active id is treated as an upsert;
    /// real-world touch streams occasionally deliver one.
    pub fn add_contact(&mut self, id: ContactId, x: f64, y: f64) {
        self.contacts.insert(id.clone(), ContactPoint { x, y });
        self.restyle_sparks_for(&id);
    }

    /// Moves a contact and restyles every spark touching it. A move for an
    /// unknown id is an out-of-order event and is ignored.
    pub fn move_contact(&mut self, id: &ContactId, x: f64, y: f64) {
        match self.contacts.get_mut(id) {
            Some(point) => *point = ContactPoint { x, y },
            None => return,
        }
        self.restyle_sparks_for(id);
    }

    /// Drops a contact and destroys every spark touching it. A remove for an
    /// unknown id is ignored. Sparks are destroyed while the contact is
    /// still in the active set, so the pair enumeration sees every partner.
    pub fn remove_contact(&mut self, id: &ContactId) {
        if !self.contacts.contains_key(id) {
            return;
        }
        let keys: Vec<SparkKey> = self
            .contacts
            .keys()
            .filter(|other| *other != id)
            .map(|other| SparkKey::for_pair(id, other))
            .collect();
        for key in &keys {
            self.sparks.destroy(key);
        }
        self.contacts.remove(id);
    }

    /// Moves to the next display mode and returns it. The first call lands
    /// on [`DisplayMode::Sparky`].
    pub fn advance_mode(&mut self) -> DisplayMode {
        let next = match self.mode {
            Some(mode) => mode.next(),
            None => DisplayMode::Sparky,
        };
        self.mode = Some(next);
        next
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    /// Decoration tick: re-randomize spark jitter, but only in sparky mode.
    /// The caller keeps ticking unconditionally; the gate lives here.
    pub fn decoration_tick(&mut self) {
        if self.mode == Some(DisplayMode::Sparky) {
            self.sparks.refresh_decoration();
        }
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_active(&self, id: &ContactId) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn sparks(&self) -> &SparkRegistry<S> {
        &self.sparks
    }

    /// Styles (creating if needed) the spark for every pair touching `id`.
    /// Pair order is irrelevant: keys are symmetric and each pairing is
    /// processed independently.
    fn restyle_sparks_for(&mut self, id: &ContactId) {
        let Self {
            contacts,
            sparks,
            mode,
        } = self;
        let point = contacts[id];
        let mode = (*mode).unwrap_or(DisplayMode::Sparky);
        for (other, &other_point) in contacts.iter().filter(|(other, _)| *other != id) {
            let key = SparkKey::for_pair(id, other);
            sparks.find_or_create(&key);
            sparks.apply_style(&key, point, other_point, mode);
        }
    }
}
