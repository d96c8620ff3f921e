//! Helios GUI application entry point.

mod app;

use helios_materials::MaterialCatalog;

fn main() -> eframe::Result {
    env_logger::init();

    // A catalog failure is fatal before the event loop starts; the panel
    // never runs with a partial or empty table.
    let catalog = match MaterialCatalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load the material catalog: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 550.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Helios",
        options,
        Box::new(move |_cc| Ok(Box::new(app::HeliosApp::new(catalog)))),
    )
}
