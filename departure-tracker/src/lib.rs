///! Departure ground-state tracker
///!
///! Tracks departing aircraft through the controller-assigned ground
///! states supplied by the host environment, detects takeoff from radar
///! samples, and posts every lifecycle transition to a local HTTP
///! listener. Host-binding glue constructs a `DepartureTracker` and
///! feeds it `GroundStateEvent` / `RadarPositionEvent` values.

pub mod config;
pub mod logging;
pub mod module;

pub use config::TrackerConfig;
pub use module::departure::{
    AircraftStatus, DepartureTracker, GroundState, GroundStateEvent, RadarPositionEvent,
    StatusNotifier, StatusUpdate, TrackedAircraft,
};
