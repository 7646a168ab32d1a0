use std::process::ExitCode;

use tcx_metrics::{Config, OutputFormat, Summary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tcx_metrics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: tcx-metrics <file.tcx>");
        return ExitCode::from(2);
    };

    let config = Config::from_env();

    let parsed = match tcx_metrics::parse_file_with(&path, &config) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let summary = parsed.summary();
    match config.output {
        OutputFormat::Text => print_text(&summary),
        OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to encode summary: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn print_text(summary: &Summary) {
    println!("activities:             {}", summary.activities);
    println!("trackpoints:            {}", summary.trackpoints);
    println!("total distance (m):     {:.2}", summary.total_distance_meters);
    println!("total time (s):         {:.1}", summary.total_time_seconds);
    println!("total calories:         {}", summary.total_calories);
    println!("total ascent (m):       {:.1}", summary.total_ascent);
    println!("total descent (m):      {:.1}", summary.total_descent);
    println!("max altitude (m):       {:.1}", summary.max_altitude);
    println!("avg heart rate (bpm):   {:.1}", summary.average_heart_rate);
    println!("max heart rate (bpm):   {}", summary.max_heart_rate);
    println!("avg power (W):          {:.1}", summary.average_watts);
    println!("max power (W):          {:.1}", summary.max_watts);
    println!("avg cadence all (rpm):  {:.1}", summary.average_cadence_all);
    println!("avg cadence bike (rpm): {:.1}", summary.average_cadence_biking);
    println!("avg speed all (m/s):    {:.2}", summary.average_speed_all);
    println!("avg speed moving (m/s): {:.2}", summary.average_speed_moving);
    if let Some(elapsed) = summary.elapsed_seconds {
        println!("elapsed (s):            {}", elapsed);
    }
}
