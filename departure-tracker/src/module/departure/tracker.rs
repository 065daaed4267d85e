///! Departure lifecycle tracking
///!
///! Applies inbound host events against the state store and hands every
///! resulting transition to the notifier. This is the only writer of the
///! store; each read-modify-write runs under the store lock, and the lock
///! is released before the notification is dispatched.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::notifier::StatusNotifier;
use super::store::StateStore;
use super::types::{
    AircraftStatus, GroundState, GroundStateEvent, RadarPositionEvent, StatusUpdate,
    TrackedAircraft,
};

/// Ground speed above which a departure sample counts towards takeoff (knots).
const AIRBORNE_GROUND_SPEED_KT: i32 = 40;

/// Climb rate above which a departure sample counts towards takeoff (ft/min).
const AIRBORNE_VERTICAL_RATE_FPM: i32 = 200;

/// Tracks departing aircraft through their ground-state lifecycle and
/// reports every transition to the listener.
pub struct DepartureTracker {
    store: Arc<RwLock<StateStore>>,
    notifier: StatusNotifier,
}

impl DepartureTracker {
    pub fn new(notifier: StatusNotifier) -> Self {
        Self {
            store: Arc::new(RwLock::new(StateStore::new())),
            notifier,
        }
    }

    /// Handle a ground-state change for one flight plan.
    ///
    /// An empty ground state clears the aircraft: its entry is removed
    /// and a CLEAR update is announced whether or not it was tracked.
    /// A recognized code replaces the entry wholesale (airborne tracking
    /// starts over); anything else is ignored.
    ///
    /// Returns the snapshot that was dispatched, None if the event was
    /// ignored. Dispatch itself is fire-and-forget.
    pub async fn handle_ground_state(&self, event: &GroundStateEvent) -> Option<StatusUpdate> {
        let update = if event.ground_state.is_empty() {
            self.store.write().await.remove(&event.callsign);
            tracing::info!("{} cleared from departure tracking", event.callsign);

            StatusUpdate {
                callsign: event.callsign.clone(),
                airport: event.airport.clone(),
                status: AircraftStatus::Clear,
                sid: String::new(),
                squawk: String::new(),
                route: String::new(),
            }
        } else {
            let Some(ground_state) = GroundState::from_code(&event.ground_state) else {
                tracing::trace!(
                    "Ignoring ground state '{}' for {}",
                    event.ground_state,
                    event.callsign
                );
                return None;
            };

            let entry = TrackedAircraft {
                callsign: event.callsign.clone(),
                status: ground_state.into(),
                airport: event.airport.clone(),
                sid: event.sid.clone(),
                squawk: event.squawk.clone(),
                route: event.route.clone(),
                airborne: false,
            };
            let update = entry.status_update();

            self.store.write().await.insert(entry);
            tracing::info!(
                "{} tracked as {} out of {}",
                event.callsign,
                ground_state.as_code(),
                event.airport
            );
            update
        };

        self.notifier.dispatch(update.clone());
        Some(update)
    }

    /// Handle a radar position sample for one target.
    ///
    /// Only an aircraft sitting at DEPA with takeoff not yet detected is
    /// considered; the sample must show ground speed and climb rate both
    /// strictly above the takeoff thresholds. Everything else is a no-op
    /// poll.
    pub async fn handle_radar_position(&self, event: &RadarPositionEvent) -> Option<StatusUpdate> {
        let update = {
            let mut store = self.store.write().await;
            let entry = store.get_mut(&event.callsign)?;

            if entry.status != AircraftStatus::Departure || entry.airborne {
                return None;
            }
            if event.ground_speed_knots <= AIRBORNE_GROUND_SPEED_KT
                || event.vertical_rate_fpm <= AIRBORNE_VERTICAL_RATE_FPM
            {
                return None;
            }

            entry.airborne = true;
            entry.status = AircraftStatus::Airborne;
            entry.status_update()
        };

        tracing::info!(
            "{} airborne ({} kt, {} fpm)",
            event.callsign,
            event.ground_speed_knots,
            event.vertical_rate_fpm
        );
        self.notifier.dispatch(update.clone());
        Some(update)
    }

    /// Snapshot of one tracked aircraft, if any.
    pub async fn tracked(&self, callsign: &str) -> Option<TrackedAircraft> {
        self.store.read().await.get(callsign).cloned()
    }

    /// Number of aircraft currently tracked.
    pub async fn tracked_count(&self) -> usize {
        self.store.read().await.len()
    }
}
