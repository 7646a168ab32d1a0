use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// One sample from a `Trackpoint` element. Absent numeric children decode to
/// zero, so a zero here may mean either "no sensor" or a genuine zero reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub time: String,
    pub position: Option<Position>,
    pub altitude_meters: f64,
    pub distance_meters: f64,
    pub heart_rate: u32,
    pub cadence: u32,
    pub watts: f64,
    pub speed: f64,
    pub sensor_state: String,
}

/// A lap exactly as the file declares it. Time, distance and calories are the
/// file's own summary values and are never recomputed from `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub start_time: String,
    pub total_time_seconds: f64,
    pub distance_meters: f64,
    pub calories: u32,
    pub maximum_speed: f64,
    pub intensity: String,
    pub trigger_method: String,
    pub points: Vec<TrackPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub sport: String,
    pub id: String,
    pub creator: String,
    pub notes: String,
    pub laps: Vec<LapRecord>,
}

/// Output of the document walker, before any metrics are derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcxDocument {
    pub activities: Vec<ActivityRecord>,
}
