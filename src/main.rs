use glam::Vec2;
use speckflow::{AnalysisRecorder, FieldConfig, FieldMetrics, FrameExporter, SpeckApp, SpeckField};
use std::path::Path;

const SURFACE_SIZE: f32 = 800.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "test" {
        let config = match args.get(2) {
            Some(path) => FieldConfig::from_json_file(Path::new(path))?,
            None => FieldConfig::default(),
        };
        run_headless_test(config)?;
    } else {
        run_gui_app();
    }

    Ok(())
}

/// Drive the field with a synthetic circular pointer sweep, exporting PNG
/// frames and printing metrics along the way.
fn run_headless_test(config: FieldConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Running headless speck field test with quantitative analysis...");

    let mut field = SpeckField::with_seed(config, SURFACE_SIZE, SURFACE_SIZE, 42)?;
    let mut exporter = FrameExporter::new(SURFACE_SIZE as u32, SURFACE_SIZE as u32);
    let mut recorder = AnalysisRecorder::new();

    let center = Vec2::splat(SURFACE_SIZE / 2.0);
    let sweep_radius = SURFACE_SIZE * 0.3;
    let frames = 120;

    for frame in 0..frames {
        let angle = frame as f32 * 0.1;
        field
            .pointer
            .move_to(center + sweep_radius * Vec2::new(angle.cos(), angle.sin()));

        field.tick(exporter.surface());
        recorder.record_frame(&field, frame);

        if frame % 30 == 0 {
            let path = format!("test_frame_{:04}.png", frame);
            exporter.save_png(Path::new(&path))?;

            let metrics = FieldMetrics::analyze(&field, frame);
            metrics.print_summary();
        }
    }

    recorder.print_trends();

    println!("Test completed! Ran {} frames with detailed analysis.", frames);
    Ok(())
}

fn run_gui_app() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SURFACE_SIZE, SURFACE_SIZE])
            .with_title("speckflow - Interactive Speck Field"),
        ..Default::default()
    };

    eframe::run_native(
        "speckflow",
        options,
        Box::new(|_cc| Box::new(SpeckApp::new(FieldConfig::default()))),
    )
    .unwrap();
}
