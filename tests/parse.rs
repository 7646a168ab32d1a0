mod common;

use common::{activity, document, lap, single_track, track, write_temp, Point};
use tcx_metrics::{Config, Metric, ParseError, Position};

fn garmin_export() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xsi:schemaLocation="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd" xmlns:ns5="http://www.garmin.com/xmlschemas/ActivityGoals/v1" xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2" xmlns:ns2="http://www.garmin.com/xmlschemas/UserProfile/v2" xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Activities>
    <Activity Sport="Biking">
      <Id>2026-03-14T07:30:00.000Z</Id>
      <Lap StartTime="2026-03-14T07:30:00.000Z">
        <TotalTimeSeconds>20.0</TotalTimeSeconds>
        <DistanceMeters>152.4</DistanceMeters>
        <MaximumSpeed>8.1</MaximumSpeed>
        <Calories>7</Calories>
        <Intensity>Active</Intensity>
        <TriggerMethod>Manual</TriggerMethod>
        <Track>
          <Trackpoint>
            <Time>2026-03-14T07:30:00.000Z</Time>
            <Position>
              <LatitudeDegrees>52.5200</LatitudeDegrees>
              <LongitudeDegrees>13.4050</LongitudeDegrees>
            </Position>
            <AltitudeMeters>34.0</AltitudeMeters>
            <DistanceMeters>0.0</DistanceMeters>
            <HeartRateBpm><Value>131</Value></HeartRateBpm>
            <Cadence>85</Cadence>
            <SensorState>Present</SensorState>
            <Extensions>
              <ns3:TPX>
                <ns3:Speed>7.5</ns3:Speed>
                <ns3:Watts>210</ns3:Watts>
              </ns3:TPX>
            </Extensions>
          </Trackpoint>
          <Trackpoint>
            <Time>2026-03-14T07:30:20.000Z</Time>
            <AltitudeMeters>36.5</AltitudeMeters>
            <DistanceMeters>152.4</DistanceMeters>
          </Trackpoint>
        </Track>
      </Lap>
      <Notes>Morning loop</Notes>
      <Creator xsi:type="Device_t">
        <Name>Edge 530</Name>
      </Creator>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
}

#[test]
fn parses_garmin_export() {
    let parsed = tcx_metrics::parse_bytes(garmin_export().as_bytes()).expect("parse");

    assert_eq!(parsed.activities.len(), 1);
    let activity = &parsed.activities[0];
    assert_eq!(activity.sport, "Biking");
    assert_eq!(activity.id, "2026-03-14T07:30:00.000Z");
    assert_eq!(activity.creator, "Edge 530");
    assert_eq!(activity.notes, "Morning loop");
    assert!(activity.started_at().is_some());

    let lap = &activity.laps[0].record;
    assert_eq!(lap.start_time, "2026-03-14T07:30:00.000Z");
    assert_eq!(lap.total_time_seconds, 20.0);
    assert_eq!(lap.distance_meters, 152.4);
    assert_eq!(lap.calories, 7);
    assert_eq!(lap.maximum_speed, 8.1);
    assert_eq!(lap.intensity, "Active");
    assert_eq!(lap.trigger_method, "Manual");
    assert_eq!(lap.points.len(), 2);

    let first = &lap.points[0];
    assert_eq!(first.time, "2026-03-14T07:30:00.000Z");
    assert_eq!(
        first.position,
        Some(Position {
            latitude: 52.52,
            longitude: 13.405
        })
    );
    assert_eq!(first.altitude_meters, 34.0);
    assert_eq!(first.heart_rate, 131);
    assert_eq!(first.cadence, 85);
    assert_eq!(first.watts, 210.0);
    assert_eq!(first.speed, 7.5);
    assert_eq!(first.sensor_state, "Present");
}

#[test]
fn absent_children_decode_to_defaults() {
    let parsed = tcx_metrics::parse_bytes(garmin_export().as_bytes()).expect("parse");
    let sparse = &parsed.activities[0].laps[0].record.points[1];

    assert_eq!(sparse.position, None);
    assert_eq!(sparse.heart_rate, 0);
    assert_eq!(sparse.cadence, 0);
    assert_eq!(sparse.watts, 0.0);
    assert_eq!(sparse.speed, 0.0);
    assert_eq!(sparse.sensor_state, "");
}

#[test]
fn extension_prefix_in_file_does_not_matter() {
    let xml = garmin_export()
        .replace("xmlns:ns3=", "xmlns:ax=")
        .replace("ns3:", "ax:");
    let parsed = tcx_metrics::parse_bytes(xml.as_bytes()).expect("parse");
    let point = &parsed.activities[0].laps[0].record.points[0];

    assert_eq!(point.watts, 210.0);
    assert_eq!(point.speed, 7.5);
}

#[test]
fn elements_outside_the_tcx_namespace_are_not_matched() {
    let xml = garmin_export().replace(
        r#"xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2""#,
        r#"xmlns="urn:something-else""#,
    );
    let parsed = tcx_metrics::parse_bytes(xml.as_bytes()).expect("parse");
    assert!(parsed.activities.is_empty());
}

#[test]
fn tracks_in_one_lap_are_flattened_in_order() {
    let xml = document(&[activity(
        "Running",
        "run",
        &[lap(
            30.0,
            50.0,
            3,
            &[
                track(&[Point::at(1.0, 0), Point::at(2.0, 0)]),
                track(&[Point::at(3.0, 0)]),
            ],
        )],
    )]);

    let parsed = tcx_metrics::parse_bytes(xml.as_bytes()).expect("parse");
    let altitudes: Vec<f64> = parsed.activities[0].laps[0]
        .record
        .points
        .iter()
        .map(|p| p.altitude_meters)
        .collect();

    assert_eq!(altitudes, vec![1.0, 2.0, 3.0]);
    assert_eq!(parsed.activities[0].sport, "Running");
}

#[test]
fn non_numeric_text_decodes_to_zero() {
    let xml = single_track(&[Point::default()])
        .replace("<Calories>10</Calories>", "<Calories>lots</Calories>")
        .replace(
            "<Trackpoint></Trackpoint>",
            "<Trackpoint><AltitudeMeters>high</AltitudeMeters><HeartRateBpm><Value></Value></HeartRateBpm></Trackpoint>",
        );

    let parsed = tcx_metrics::parse_bytes(xml.as_bytes()).expect("parse");
    let lap = &parsed.activities[0].laps[0];
    assert_eq!(lap.record.calories, 0);
    assert_eq!(lap.record.points[0].altitude_meters, 0.0);
    assert_eq!(lap.record.points[0].heart_rate, 0);
}

#[test]
fn document_without_activities_has_fallback_metrics() {
    let parsed = tcx_metrics::parse_bytes(document(&[]).as_bytes()).expect("parse");

    assert!(parsed.activities.is_empty());
    assert_eq!(parsed.total_distance_meters(), 0.0);
    assert_eq!(parsed.total_ascent(), 0.0);
    assert_eq!(parsed.total_descent(), 0.0);
    assert_eq!(parsed.max_altitude(), Metric::NotAvailable);
    assert_eq!(parsed.average_heart_rate(), 0.0);
    assert_eq!(parsed.average_watts(), Metric::NotAvailable);
    assert_eq!(parsed.max_watts(), Metric::NotAvailable);
    assert_eq!(parsed.average_cadence_all(), 0.0);
    assert_eq!(parsed.average_speed_moving(), 0.0);
    assert_eq!(parsed.elapsed_seconds(), None);
}

#[test]
fn malformed_xml_is_an_error() {
    let truncated = &garmin_export()[..400];
    let err = tcx_metrics::parse_bytes(truncated.as_bytes()).expect_err("should fail");
    assert!(matches!(err, ParseError::InvalidTcx(_)));

    let mismatched = "<TrainingCenterDatabase><Activities></Activity></TrainingCenterDatabase>";
    assert!(tcx_metrics::parse_bytes(mismatched.as_bytes()).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join(format!("missing-{}.tcx", uuid::Uuid::new_v4()));
    let err = tcx_metrics::parse_file(&path).expect_err("should fail");
    assert!(matches!(err, ParseError::Io { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let path = write_temp(garmin_export());
    let config = Config {
        max_file_size: 64,
        ..Config::default()
    };

    let err = tcx_metrics::parse_file_with(&path, &config).expect_err("should fail");
    std::fs::remove_file(&path).expect("cleanup");

    assert!(matches!(err, ParseError::FileTooLarge { limit: 64, .. }));
}

#[test]
fn parsing_twice_gives_identical_results() {
    let path = write_temp(garmin_export());

    let first = tcx_metrics::parse_file(&path).expect("first parse");
    let second = tcx_metrics::parse_file(&path).expect("second parse");
    std::fs::remove_file(&path).expect("cleanup");

    assert_eq!(first, second);
}

#[test]
fn parse_files_keeps_input_order() {
    let ride = write_temp(garmin_export());
    let run = write_temp(&document(&[activity(
        "Running",
        "run",
        &[lap(10.0, 42.0, 1, &[track(&[Point::at(5.0, 120)])])],
    )]));
    let missing = std::env::temp_dir().join(format!("missing-{}.tcx", uuid::Uuid::new_v4()));

    let results = tcx_metrics::parse_files(&[&ride, &missing, &run], &Config::default());
    std::fs::remove_file(&ride).expect("cleanup");
    std::fs::remove_file(&run).expect("cleanup");

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().expect("ride").activities[0].sport,
        "Biking"
    );
    assert!(matches!(results[1], Err(ParseError::Io { .. })));
    assert_eq!(
        results[2].as_ref().expect("run").total_distance_meters(),
        42.0
    );
}
