mod app;
mod error;
mod ingest;
mod upload;

use app::TextUploader;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 640.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Text File Uploader",
        options,
        Box::new(|cc| Box::new(TextUploader::new(cc))),
    )
}
