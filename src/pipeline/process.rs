use chrono::{DateTime, Utc};

use crate::types::activity::{ActivityRecord, LapRecord, TcxDocument, TrackPoint};
use crate::types::metric::Metric;
use crate::types::summary::{
    parse_timestamp, Activity, ActivityMetrics, CadenceStats, FileMetrics, Lap, LapMetrics,
    ParsedFile, PowerStats, SpeedStats,
};

/// Altitude changes accumulated over consecutive trackpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Elevation {
    pub ascent: f64,
    pub descent: f64,
    pub max_altitude: Metric,
}

pub fn process(document: TcxDocument) -> ParsedFile {
    let activities: Vec<Activity> = document
        .activities
        .into_iter()
        .map(process_activity)
        .collect();

    let metrics = file_metrics(&activities);

    ParsedFile {
        activities,
        metrics,
    }
}

fn process_activity(record: ActivityRecord) -> Activity {
    let laps: Vec<Lap> = record.laps.into_iter().map(process_lap).collect();
    let metrics = activity_metrics(&laps);

    Activity {
        sport: record.sport,
        id: record.id,
        creator: record.creator,
        notes: record.notes,
        laps,
        metrics,
    }
}

fn process_lap(record: LapRecord) -> Lap {
    let metrics = lap_metrics(&record.points);
    Lap { record, metrics }
}

pub fn lap_metrics(points: &[TrackPoint]) -> LapMetrics {
    let elevation = elevation(points);

    LapMetrics {
        trackpoint_count: points.len(),
        ascent: elevation.ascent,
        descent: elevation.descent,
        max_altitude: elevation.max_altitude,
        average_heart_rate: average_heart_rate(points),
        max_heart_rate: max_heart_rate(points),
    }
}

fn activity_metrics(laps: &[Lap]) -> ActivityMetrics {
    let points = || laps.iter().flat_map(|lap| lap.record.points.iter());

    ActivityMetrics {
        trackpoint_count: laps.iter().map(|lap| lap.metrics.trackpoint_count).sum(),
        total_time_seconds: laps.iter().map(|lap| lap.record.total_time_seconds).sum(),
        total_distance_meters: laps.iter().map(|lap| lap.record.distance_meters).sum(),
        total_calories: laps.iter().map(|lap| u64::from(lap.record.calories)).sum(),
        ascent: laps.iter().map(|lap| lap.metrics.ascent).sum(),
        descent: laps.iter().map(|lap| lap.metrics.descent).sum(),
        max_altitude: laps
            .iter()
            .map(|lap| lap.metrics.max_altitude)
            .fold(Metric::NotAvailable, Metric::max),
        average_heart_rate: average_heart_rate(points()),
        max_heart_rate: max_heart_rate(points()),
        power: power(points()),
    }
}

fn file_metrics(activities: &[Activity]) -> FileMetrics {
    let points = || activities.iter().flat_map(Activity::trackpoints);
    let (started_at, completed_at) = time_bounds(points());

    FileMetrics {
        trackpoint_count: activities.iter().map(|a| a.metrics.trackpoint_count).sum(),
        total_time_seconds: activities.iter().map(|a| a.metrics.total_time_seconds).sum(),
        total_distance_meters: activities
            .iter()
            .map(|a| a.metrics.total_distance_meters)
            .sum(),
        total_calories: activities.iter().map(|a| a.metrics.total_calories).sum(),
        ascent: activities.iter().map(|a| a.metrics.ascent).sum(),
        descent: activities.iter().map(|a| a.metrics.descent).sum(),
        max_altitude: activities
            .iter()
            .map(|a| a.metrics.max_altitude)
            .fold(Metric::NotAvailable, Metric::max),
        // Rates come from the whole sample population, never from per-activity means.
        average_heart_rate: average_heart_rate(points()),
        max_heart_rate: max_heart_rate(points()),
        power: power(points()),
        cadence: cadence(points()),
        speed: speed(points()),
        started_at,
        completed_at,
    }
}

/// Ascent and descent from consecutive altitude deltas; zero deltas count
/// toward neither.
pub fn elevation<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> Elevation {
    let mut previous: Option<f64> = None;
    let mut result = Elevation::default();

    for point in points {
        let altitude = point.altitude_meters;
        if let Some(prev) = previous {
            let delta = altitude - prev;
            if delta > 0.0 {
                result.ascent += delta;
            } else if delta < 0.0 {
                result.descent += -delta;
            }
        }
        result.max_altitude = result.max_altitude.max(Metric::Value(altitude));
        previous = Some(altitude);
    }

    result
}

/// Mean of every sample, zeros included. 0.0 for an empty population.
pub fn all_average(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Mean of samples strictly greater than zero. Zero is read as "sensor idle".
pub fn active_average(values: impl IntoIterator<Item = f64>) -> f64 {
    all_average(values.into_iter().filter(|v| *v > 0.0))
}

pub fn average_heart_rate<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> f64 {
    active_average(points.into_iter().map(|p| f64::from(p.heart_rate)))
}

pub fn max_heart_rate<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> u32 {
    points.into_iter().map(|p| p.heart_rate).max().unwrap_or(0)
}

/// Both values are unavailable unless at least one sample reports watts > 0.
pub fn power<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> PowerStats {
    let (sum, count, max) = points
        .into_iter()
        .map(|p| p.watts)
        .filter(|w| *w > 0.0)
        .fold((0.0, 0usize, 0.0f64), |(sum, count, max), w| {
            (sum + w, count + 1, max.max(w))
        });

    if count == 0 {
        return PowerStats {
            average: Metric::NotAvailable,
            maximum: Metric::NotAvailable,
        };
    }

    PowerStats {
        average: Metric::Value(sum / count as f64),
        maximum: Metric::Value(max),
    }
}

pub fn cadence<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> CadenceStats {
    let (all, biking) = paired_averages(points.into_iter().map(|p| f64::from(p.cadence)));
    CadenceStats { all, biking }
}

pub fn speed<'a>(points: impl IntoIterator<Item = &'a TrackPoint>) -> SpeedStats {
    let (all, moving) = paired_averages(points.into_iter().map(|p| p.speed));
    SpeedStats { all, moving }
}

fn paired_averages(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let samples: Vec<f64> = values.into_iter().collect();
    (
        all_average(samples.iter().copied()),
        active_average(samples),
    )
}

/// Earliest and latest trackpoint timestamps that parse as RFC 3339.
fn time_bounds<'a>(
    points: impl IntoIterator<Item = &'a TrackPoint>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    points
        .into_iter()
        .filter_map(|p| parse_timestamp(&p.time))
        .fold((None, None), |(earliest, latest), time: DateTime<Utc>| {
            (
                Some(earliest.map_or(time, |t: DateTime<Utc>| t.min(time))),
                Some(latest.map_or(time, |t: DateTime<Utc>| t.max(time))),
            )
        })
}
