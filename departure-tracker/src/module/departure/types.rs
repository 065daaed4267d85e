///! Departure lifecycle data types
///!
///! Ground-state codes as assigned by the controller, the per-aircraft
///! tracking entry, inbound host events, and the outbound status payload.

use serde::{Deserialize, Serialize};

/// Controller-assigned ground state of a departing aircraft.
///
/// Only these four codes mark a departure as in progress; an empty
/// ground-state string means the assignment was cleared and anything
/// else is not a departure phase at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundState {
    #[serde(rename = "STUP")]
    Startup,
    #[serde(rename = "PUSH")]
    Pushback,
    #[serde(rename = "TAXI")]
    Taxi,
    #[serde(rename = "DEPA")]
    Departure,
}

impl GroundState {
    /// Parse a controller-assigned ground-state code.
    /// Returns None for any code outside the four departure phases.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "STUP" => Some(GroundState::Startup),
            "PUSH" => Some(GroundState::Pushback),
            "TAXI" => Some(GroundState::Taxi),
            "DEPA" => Some(GroundState::Departure),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            GroundState::Startup => "STUP",
            GroundState::Pushback => "PUSH",
            GroundState::Taxi => "TAXI",
            GroundState::Departure => "DEPA",
        }
    }
}

/// Reportable lifecycle status of a tracked aircraft.
///
/// The four ground states plus the two synthetic values the tracker
/// itself produces: `Airborne` once takeoff is detected and `Clear`
/// when the ground-state assignment is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftStatus {
    #[serde(rename = "STUP")]
    Startup,
    #[serde(rename = "PUSH")]
    Pushback,
    #[serde(rename = "TAXI")]
    Taxi,
    #[serde(rename = "DEPA")]
    Departure,
    #[serde(rename = "AIRBORNE")]
    Airborne,
    #[serde(rename = "CLEAR")]
    Clear,
}

impl AircraftStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            AircraftStatus::Startup => "STUP",
            AircraftStatus::Pushback => "PUSH",
            AircraftStatus::Taxi => "TAXI",
            AircraftStatus::Departure => "DEPA",
            AircraftStatus::Airborne => "AIRBORNE",
            AircraftStatus::Clear => "CLEAR",
        }
    }
}

impl From<GroundState> for AircraftStatus {
    fn from(state: GroundState) -> Self {
        match state {
            GroundState::Startup => AircraftStatus::Startup,
            GroundState::Pushback => AircraftStatus::Pushback,
            GroundState::Taxi => AircraftStatus::Taxi,
            GroundState::Departure => AircraftStatus::Departure,
        }
    }
}

/// One tracked departing aircraft.
///
/// Airport, SID, squawk, and route are snapshots taken from the
/// ground-state event that created the entry; radar samples never
/// refresh them. `airborne` only ever goes false -> true while the
/// entry lives, but a later ground-state event replaces the entry
/// wholesale and starts over at false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedAircraft {
    pub callsign: String,
    pub status: AircraftStatus,
    pub airport: String,
    pub sid: String,
    pub squawk: String,
    pub route: String,
    pub airborne: bool,
}

impl TrackedAircraft {
    /// Snapshot this entry into the outbound payload shape.
    pub fn status_update(&self) -> StatusUpdate {
        StatusUpdate {
            callsign: self.callsign.clone(),
            airport: self.airport.clone(),
            status: self.status,
            sid: self.sid.clone(),
            squawk: self.squawk.clone(),
            route: self.route.clone(),
        }
    }
}

/// Ground-state change pushed by the host for one flight plan.
///
/// `ground_state` arrives as the raw controller-assigned code; an empty
/// string means the assignment was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundStateEvent {
    pub callsign: String,
    pub ground_state: String,
    pub airport: String,
    pub sid: String,
    pub squawk: String,
    pub route: String,
}

/// Periodic radar position sample for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPositionEvent {
    pub callsign: String,
    pub ground_speed_knots: i32,
    pub vertical_rate_fpm: i32,
}

/// Status update delivered to the external listener.
///
/// Field order matches the wire schema consumed by the listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub callsign: String,
    pub airport: String,
    pub status: AircraftStatus,
    pub sid: String,
    pub squawk: String,
    pub route: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_state_codes_round_trip() {
        for code in ["STUP", "PUSH", "TAXI", "DEPA"] {
            let state = GroundState::from_code(code).unwrap();
            assert_eq!(state.as_code(), code);
        }
    }

    #[test]
    fn test_unrecognized_ground_state_codes() {
        assert_eq!(GroundState::from_code(""), None);
        assert_eq!(GroundState::from_code("TOGA"), None);
        assert_eq!(GroundState::from_code("depa"), None);
        assert_eq!(GroundState::from_code("AIRBORNE"), None);
    }

    #[test]
    fn test_status_serializes_to_wire_code() {
        let json = serde_json::to_string(&AircraftStatus::Airborne).unwrap();
        assert_eq!(json, r#""AIRBORNE""#);
        let json = serde_json::to_string(&AircraftStatus::Clear).unwrap();
        assert_eq!(json, r#""CLEAR""#);
    }

    #[test]
    fn test_status_update_wire_shape() {
        let entry = TrackedAircraft {
            callsign: "BAW123".to_string(),
            status: AircraftStatus::Startup,
            airport: "EGLL".to_string(),
            sid: "CPT1A".to_string(),
            squawk: "2345".to_string(),
            route: "DCT".to_string(),
            airborne: false,
        };

        let value = serde_json::to_value(entry.status_update()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "callsign": "BAW123",
                "airport": "EGLL",
                "status": "STUP",
                "sid": "CPT1A",
                "squawk": "2345",
                "route": "DCT",
            })
        );
        // airborne is tracker-internal and must not leak onto the wire
        assert!(value.get("airborne").is_none());
    }

    #[test]
    fn test_events_deserialize_from_host_json() {
        let event: GroundStateEvent = serde_json::from_str(
            r#"{
                "callsign": "BAW123",
                "groundState": "PUSH",
                "airport": "EGLL",
                "sid": "CPT1A",
                "squawk": "2345",
                "route": "DCT"
            }"#,
        )
        .unwrap();
        assert_eq!(event.ground_state, "PUSH");
        assert_eq!(event.airport, "EGLL");

        let sample: RadarPositionEvent = serde_json::from_str(
            r#"{"callsign": "BAW123", "groundSpeedKnots": 55, "verticalRateFpm": 300}"#,
        )
        .unwrap();
        assert_eq!(sample.ground_speed_knots, 55);
        assert_eq!(sample.vertical_rate_fpm, 300);
    }
}
