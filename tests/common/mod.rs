#![allow(dead_code)]

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Point {
    pub time: &'static str,
    pub position: Option<(f64, f64)>,
    pub altitude: Option<f64>,
    pub distance: Option<f64>,
    pub heart_rate: Option<u32>,
    pub cadence: Option<u32>,
    pub watts: Option<f64>,
    pub speed: Option<f64>,
}

impl Point {
    pub fn at(altitude: f64, heart_rate: u32) -> Self {
        Self {
            altitude: Some(altitude),
            heart_rate: Some(heart_rate),
            ..Self::default()
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<Trackpoint>");
        if !self.time.is_empty() {
            xml.push_str(&format!("<Time>{}</Time>", self.time));
        }
        if let Some((lat, lon)) = self.position {
            xml.push_str(&format!(
                "<Position><LatitudeDegrees>{lat}</LatitudeDegrees><LongitudeDegrees>{lon}</LongitudeDegrees></Position>"
            ));
        }
        if let Some(alt) = self.altitude {
            xml.push_str(&format!("<AltitudeMeters>{alt}</AltitudeMeters>"));
        }
        if let Some(dist) = self.distance {
            xml.push_str(&format!("<DistanceMeters>{dist}</DistanceMeters>"));
        }
        if let Some(hr) = self.heart_rate {
            xml.push_str(&format!("<HeartRateBpm><Value>{hr}</Value></HeartRateBpm>"));
        }
        if let Some(cad) = self.cadence {
            xml.push_str(&format!("<Cadence>{cad}</Cadence>"));
        }
        if self.watts.is_some() || self.speed.is_some() {
            xml.push_str("<Extensions><ns3:TPX>");
            if let Some(speed) = self.speed {
                xml.push_str(&format!("<ns3:Speed>{speed}</ns3:Speed>"));
            }
            if let Some(watts) = self.watts {
                xml.push_str(&format!("<ns3:Watts>{watts}</ns3:Watts>"));
            }
            xml.push_str("</ns3:TPX></Extensions>");
        }
        xml.push_str("</Trackpoint>");
        xml
    }
}

pub fn track(points: &[Point]) -> String {
    let body: String = points.iter().map(Point::to_xml).collect();
    format!("<Track>{body}</Track>")
}

pub fn lap(total_time: f64, distance: f64, calories: u32, tracks: &[String]) -> String {
    format!(
        r#"<Lap StartTime="2026-01-01T12:00:00Z"><TotalTimeSeconds>{total_time}</TotalTimeSeconds><DistanceMeters>{distance}</DistanceMeters><Calories>{calories}</Calories><Intensity>Active</Intensity><TriggerMethod>Manual</TriggerMethod>{}</Lap>"#,
        tracks.concat()
    )
}

pub fn activity(sport: &str, id: &str, laps: &[String]) -> String {
    format!(
        r#"<Activity Sport="{sport}"><Id>{id}</Id>{}</Activity>"#,
        laps.concat()
    )
}

pub fn document(activities: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Activities>{}</Activities>
</TrainingCenterDatabase>"#,
        activities.concat()
    )
}

/// A single-activity, single-lap, single-track document.
pub fn single_track(points: &[Point]) -> String {
    document(&[activity(
        "Biking",
        "2026-01-01T12:00:00Z",
        &[lap(60.0, 100.0, 10, &[track(points)])],
    )])
}

pub fn write_temp(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tcx-metrics-{}.tcx", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("write temp file");
    path
}
