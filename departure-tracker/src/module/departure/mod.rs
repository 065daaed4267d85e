///! Departure ground-state tracking module
///!
///! Follows controller-assigned ground states (STUP, PUSH, TAXI, DEPA)
///! through to airborne detection and reports every transition to the
///! status-update listener.
///!
///! ## Main Components
///! - `DepartureTracker`: transition engine, sole writer of the store
///! - `StateStore`: callsign-keyed map of tracked departures
///! - `StatusNotifier`: fire-and-forget HTTP delivery of snapshots

// ============ Data Types ============
pub mod types;
pub use types::{
    AircraftStatus, GroundState, GroundStateEvent, RadarPositionEvent, StatusUpdate,
    TrackedAircraft,
};

// ============ State Store ============
pub mod store;
pub use store::StateStore;

// ============ Transition Engine ============
pub mod tracker;
pub use tracker::DepartureTracker;

// ============ Listener Notification ============
pub mod notifier;
pub use notifier::{DeliveryError, StatusNotifier};
