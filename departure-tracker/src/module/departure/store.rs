///! In-memory store of tracked departures, keyed by callsign.

use std::collections::HashMap;

use super::types::TrackedAircraft;

/// Callsign-keyed map of every departure currently being tracked.
///
/// The store itself is plain and synchronous; `DepartureTracker` wraps
/// it in a lock and serializes every read-modify-write against it.
#[derive(Debug, Default)]
pub struct StateStore {
    aircraft: HashMap<String, TrackedAircraft>,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            aircraft: HashMap::new(),
        }
    }

    pub fn get(&self, callsign: &str) -> Option<&TrackedAircraft> {
        self.aircraft.get(callsign)
    }

    pub fn get_mut(&mut self, callsign: &str) -> Option<&mut TrackedAircraft> {
        self.aircraft.get_mut(callsign)
    }

    /// Insert or replace the entry for its callsign.
    pub fn insert(&mut self, entry: TrackedAircraft) {
        self.aircraft.insert(entry.callsign.clone(), entry);
    }

    /// Remove an entry. Removing an untracked callsign is a no-op.
    pub fn remove(&mut self, callsign: &str) -> Option<TrackedAircraft> {
        self.aircraft.remove(callsign)
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}
