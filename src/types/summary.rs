use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::activity::{LapRecord, TrackPoint};
use crate::types::metric::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PowerStats {
    pub average: Metric,
    pub maximum: Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CadenceStats {
    /// Mean over every trackpoint, zero readings included.
    pub all: f64,
    /// Mean over trackpoints with cadence > 0.
    pub biking: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SpeedStats {
    pub all: f64,
    pub moving: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LapMetrics {
    pub trackpoint_count: usize,
    pub ascent: f64,
    pub descent: f64,
    pub max_altitude: Metric,
    pub average_heart_rate: f64,
    pub max_heart_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lap {
    pub record: LapRecord,
    pub metrics: LapMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActivityMetrics {
    pub trackpoint_count: usize,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
    pub total_calories: u64,
    pub ascent: f64,
    pub descent: f64,
    pub max_altitude: Metric,
    pub average_heart_rate: f64,
    pub max_heart_rate: u32,
    pub power: PowerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub sport: String,
    pub id: String,
    pub creator: String,
    pub notes: String,
    pub laps: Vec<Lap>,
    pub metrics: ActivityMetrics,
}

impl Activity {
    /// The activity id parsed as a timestamp, when it is one.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.id)
    }

    pub fn trackpoints(&self) -> impl Iterator<Item = &TrackPoint> {
        self.laps.iter().flat_map(|lap| lap.record.points.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FileMetrics {
    pub trackpoint_count: usize,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
    pub total_calories: u64,
    pub ascent: f64,
    pub descent: f64,
    pub max_altitude: Metric,
    pub average_heart_rate: f64,
    pub max_heart_rate: u32,
    pub power: PowerStats,
    pub cadence: CadenceStats,
    pub speed: SpeedStats,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Fully computed result of parsing one TCX file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedFile {
    pub activities: Vec<Activity>,
    pub metrics: FileMetrics,
}

impl ParsedFile {
    pub fn trackpoints(&self) -> impl Iterator<Item = &TrackPoint> {
        self.activities.iter().flat_map(Activity::trackpoints)
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.metrics.total_distance_meters
    }

    pub fn total_time_seconds(&self) -> f64 {
        self.metrics.total_time_seconds
    }

    pub fn total_calories(&self) -> u64 {
        self.metrics.total_calories
    }

    pub fn total_ascent(&self) -> f64 {
        self.metrics.ascent
    }

    pub fn total_descent(&self) -> f64 {
        self.metrics.descent
    }

    pub fn max_altitude(&self) -> Metric {
        self.metrics.max_altitude
    }

    pub fn average_heart_rate(&self) -> f64 {
        self.metrics.average_heart_rate
    }

    pub fn max_heart_rate(&self) -> u32 {
        self.metrics.max_heart_rate
    }

    pub fn average_watts(&self) -> Metric {
        self.metrics.power.average
    }

    pub fn max_watts(&self) -> Metric {
        self.metrics.power.maximum
    }

    pub fn average_cadence_all(&self) -> f64 {
        self.metrics.cadence.all
    }

    pub fn average_cadence_biking(&self) -> f64 {
        self.metrics.cadence.biking
    }

    pub fn average_speed_all(&self) -> f64 {
        self.metrics.speed.all
    }

    pub fn average_speed_moving(&self) -> f64 {
        self.metrics.speed.moving
    }

    pub fn elapsed_seconds(&self) -> Option<i64> {
        match (self.metrics.started_at, self.metrics.completed_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            activities: self.activities.len(),
            trackpoints: self.metrics.trackpoint_count,
            total_distance_meters: self.total_distance_meters(),
            total_time_seconds: self.total_time_seconds(),
            total_calories: self.total_calories(),
            total_ascent: self.total_ascent(),
            total_descent: self.total_descent(),
            max_altitude: self.max_altitude(),
            average_heart_rate: self.average_heart_rate(),
            max_heart_rate: self.max_heart_rate(),
            average_watts: self.average_watts(),
            max_watts: self.max_watts(),
            average_cadence_all: self.average_cadence_all(),
            average_cadence_biking: self.average_cadence_biking(),
            average_speed_all: self.average_speed_all(),
            average_speed_moving: self.average_speed_moving(),
            started_at: self.metrics.started_at,
            completed_at: self.metrics.completed_at,
            elapsed_seconds: self.elapsed_seconds(),
        }
    }
}

/// Flat view of the file-level metrics, suitable for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub activities: usize,
    pub trackpoints: usize,
    pub total_distance_meters: f64,
    pub total_time_seconds: f64,
    pub total_calories: u64,
    pub total_ascent: f64,
    pub total_descent: f64,
    pub max_altitude: Metric,
    pub average_heart_rate: f64,
    pub max_heart_rate: u32,
    pub average_watts: Metric,
    pub max_watts: Metric,
    pub average_cadence_all: f64,
    pub average_cadence_biking: f64,
    pub average_speed_all: f64,
    pub average_speed_moving: f64,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub elapsed_seconds: Option<i64>,
}

pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
