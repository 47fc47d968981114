use classic_cv::config::{load_config, CannyToolConfig};
use classic_cv::edges::{sobel_edges, CannyDetector};
use classic_cv::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
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
    let config: CannyToolConfig =
        load_config(Path::new(&config_path)).map_err(|e| format!("{config_path}: {e}"))?;

    let gray = load_grayscale_image(&config.input)
        .map_err(|e| format!("Failed to open {}: {e}", config.input.display()))?;
    let detector = CannyDetector::new(config.canny);
    let output = detector.run_with_report(&gray).map_err(|e| e.to_string())?;

    save_grayscale_u8(&output.edges, &config.output.edges_image)
        .map_err(|e| format!("Failed to save {}: {e}", config.output.edges_image.display()))?;
    let params = detector.params();
    println!(
        "Saved {} strong edge pixels ({}x{}, radius {}, bound {}) to {}",
        output.report.strong_count,
        output.report.width,
        output.report.height,
        params.kernel_size,
        params.upper_threshold,
        config.output.edges_image.display()
    );

    if let Some(path) = &config.output.sobel_image {
        let sobel = sobel_edges(&gray).map_err(|e| e.to_string())?;
        save_grayscale_u8(&sobel, path)
            .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
        println!("Saved Sobel edge strength to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &output.report)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!(
            "Saved report to {} (total {:.3} ms)",
            path.display(),
            output.report.timing.total_ms
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: canny_edges <config.json>".to_string()
}
