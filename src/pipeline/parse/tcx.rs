use crate::error::ParseError;
use crate::pipeline::parse::document::{self, Element};
use crate::pipeline::parse::field::{
    decode_float, decode_int, decode_position, decode_string, decode_verbatim,
};
use crate::pipeline::parse::namespace::Namespaces;
use crate::pipeline::parse::Parser;
use crate::types::activity::{ActivityRecord, LapRecord, TcxDocument, TrackPoint};

pub struct TcxParser {
    namespaces: Namespaces,
}

impl Default for TcxParser {
    fn default() -> Self {
        Self::with_namespaces(Namespaces::tcx())
    }
}

impl Parser for TcxParser {
    fn parse(&self, bytes: &[u8]) -> Result<TcxDocument, ParseError> {
        let root = document::read_document(bytes)?;
        Ok(self.walk(&root))
    }
}

impl TcxParser {
    /// `namespaces` must bind the `tcx` and `tpx` prefixes.
    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn walk(&self, root: &Element) -> TcxDocument {
        let activities = root
            .find_all("tcx:Activities/tcx:Activity", &self.namespaces)
            .into_iter()
            .map(|el| self.activity(el))
            .collect();

        TcxDocument { activities }
    }

    fn activity(&self, el: &Element) -> ActivityRecord {
        let ns = &self.namespaces;
        let laps: Vec<LapRecord> = el
            .find_all("tcx:Lap", ns)
            .into_iter()
            .map(|lap| self.lap(lap))
            .collect();

        let record = ActivityRecord {
            sport: decode_string(el.attribute("Sport")),
            id: decode_string(el.find_text("tcx:Id", ns)),
            creator: decode_string(el.find_text("tcx:Creator/tcx:Name", ns)),
            notes: decode_string(el.find_text("tcx:Notes", ns)),
            laps,
        };

        tracing::debug!(
            "Walked activity {} ({}, {} laps)",
            record.id,
            record.sport,
            record.laps.len()
        );

        record
    }

    fn lap(&self, el: &Element) -> LapRecord {
        let ns = &self.namespaces;

        // Several Track elements in one lap are concatenated in document order.
        let points = el
            .find_all("tcx:Track/tcx:Trackpoint", ns)
            .into_iter()
            .map(|tp| self.trackpoint(tp))
            .collect();

        LapRecord {
            start_time: decode_string(el.attribute("StartTime")),
            total_time_seconds: decode_float(el.find_text("tcx:TotalTimeSeconds", ns)),
            distance_meters: decode_float(el.find_text("tcx:DistanceMeters", ns)),
            calories: decode_int(el.find_text("tcx:Calories", ns)),
            maximum_speed: decode_float(el.find_text("tcx:MaximumSpeed", ns)),
            intensity: decode_string(el.find_text("tcx:Intensity", ns)),
            trigger_method: decode_string(el.find_text("tcx:TriggerMethod", ns)),
            points,
        }
    }

    fn trackpoint(&self, el: &Element) -> TrackPoint {
        let ns = &self.namespaces;
        TrackPoint {
            time: decode_verbatim(el.find_text("tcx:Time", ns)),
            position: decode_position(el.find("tcx:Position", ns), ns),
            altitude_meters: decode_float(el.find_text("tcx:AltitudeMeters", ns)),
            distance_meters: decode_float(el.find_text("tcx:DistanceMeters", ns)),
            heart_rate: decode_int(el.find_text("tcx:HeartRateBpm/tcx:Value", ns)),
            cadence: decode_int(el.find_text("tcx:Cadence", ns)),
            watts: decode_float(el.find_text("tcx:Extensions/tpx:TPX/tpx:Watts", ns)),
            speed: decode_float(el.find_text("tcx:Extensions/tpx:TPX/tpx:Speed", ns)),
            sensor_state: decode_string(el.find_text("tcx:SensorState", ns)),
        }
    }
}
