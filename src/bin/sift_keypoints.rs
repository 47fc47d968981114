use classic_cv::config::{load_config, SiftToolConfig};
use classic_cv::image::io::{load_grayscale_image, write_json_file};
use classic_cv::sift::{KeyPoint, SiftExtractor, SiftReport};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: SiftToolConfig =
        load_config(Path::new(&config_path)).map_err(|e| format!("{config_path}: {e}"))?;

    let gray = load_grayscale_image(&config.input)
        .map_err(|e| format!("Failed to open {}: {e}", config.input.display()))?;
    let extractor = SiftExtractor::new(config.sift);
    let params = *extractor.params();
    let output = extractor
        .extract_with_report(&gray)
        .map_err(|e| e.to_string())?;

    let summary = KeypointSummary {
        width: gray.w,
        height: gray.h,
        octaves: params.octaves,
        scales: params.scales,
        threshold: params.threshold,
        keypoint_count: output.keypoints.len(),
        report: &output.report,
        keypoints: &output.keypoints,
    };
    write_json_file(&config.output.keypoints_json, &summary).map_err(|e| {
        format!(
            "Failed to write {}: {e}",
            config.output.keypoints_json.display()
        )
    })?;

    println!(
        "Saved {} keypoints ({} candidates) to {}",
        summary.keypoint_count,
        output.report.candidate_count,
        config.output.keypoints_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: sift_keypoints <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KeypointSummary<'a> {
    width: usize,
    height: usize,
    octaves: usize,
    scales: usize,
    threshold: f32,
    keypoint_count: usize,
    report: &'a SiftReport,
    keypoints: &'a [KeyPoint],
}
