//! Main application state and egui integration.
//!
//! A single control panel: wavelength and intensity sliders plus a material
//! dropdown on the left, live results and bar plots on the right. The
//! pipeline is constant-time pure math, so the result is recomputed every
//! frame from the current control values.

use egui::Ui;

use helios_core::current::CurrentParams;
use helios_core::pipeline;
use helios_core::types::{ComputationInput, ComputationResult};
use helios_materials::MaterialCatalog;

/// The main Helios application.
pub struct HeliosApp {
    /// Work-function table, loaded once at startup.
    catalog: MaterialCatalog,
    /// Incident wavelength (nm), integer slider steps.
    wavelength_nm: f64,
    /// Light intensity as a percentage.
    intensity_percent: f64,
    /// Symbol of the selected material.
    selected_symbol: String,
}

impl HeliosApp {
    pub fn new(catalog: MaterialCatalog) -> Self {
        let selected_symbol = catalog
            .sorted_materials()
            .first()
            .map(|m| m.symbol.clone())
            .unwrap_or_default();
        Self {
            catalog,
            wavelength_nm: 400.0,
            intensity_percent: 100.0,
            selected_symbol,
        }
    }

    fn evaluate(&self) -> Option<ComputationResult> {
        let material = self.catalog.get(&self.selected_symbol).ok()?.clone();
        let input = ComputationInput {
            wavelength_nm: self.wavelength_nm,
            intensity_fraction: self.intensity_percent / 100.0,
            material,
        };
        Some(pipeline::evaluate(&input, &CurrentParams::default()))
    }

    fn controls_ui(&mut self, ui: &mut Ui) {
        ui.heading("Controls");
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.wavelength_nm, 200.0..=800.0)
                .integer()
                .text("Wavelength (nm)"),
        );
        ui.add(
            egui::Slider::new(&mut self.intensity_percent, 0.0..=100.0)
                .fixed_decimals(0)
                .text("Intensity (%)"),
        );

        ui.add_space(8.0);

        let selected_label = self
            .catalog
            .get(&self.selected_symbol)
            .map(|m| format!("{} - {}", m.symbol, m.name))
            .unwrap_or_default();
        egui::ComboBox::from_label("Material")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for material in self.catalog.sorted_materials() {
                    ui.selectable_value(
                        &mut self.selected_symbol,
                        material.symbol.clone(),
                        format!("{} - {}", material.symbol, material.name),
                    );
                }
            });
    }
}

impl eframe::App for HeliosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| self.controls_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.evaluate() {
            Some(result) => results_ui(ui, &result, self.wavelength_nm),
            None => {
                ui.label("Select a material to see results.");
            }
        });
    }
}

fn results_ui(ui: &mut Ui, result: &ComputationResult, wavelength_nm: f64) {
    ui.heading("Results");
    ui.separator();

    ui.label(format!(
        "λ = {:.0} nm → E_photon = {:.3} eV",
        wavelength_nm, result.photon_energy_ev
    ));
    ui.label(format!("Φ = {:.3} eV", result.work_function_ev));

    if result.emits {
        ui.label(format!(
            "Kinetic energy k = {:.3} eV → Emission: YES",
            result.kinetic_energy_ev
        ));
    } else {
        ui.label(format!(
            "Kinetic energy k = {:.3} eV → Emission: NO",
            result.kinetic_energy_ev
        ));
    }

    match (result.emits, result.current_fraction, result.current_amperes) {
        (true, Some(fraction), Some(amperes)) => {
            ui.label(format!("Current fraction = {:.4}", fraction));
            ui.label(format!("I ≈ {:.3e} A (P_max = 1 mW, QE = 1)", amperes));
        }
        // The fraction model's singular point: rendered, never shown as zero.
        (true, _, _) => {
            ui.label("Current: indeterminate (division by zero)");
        }
        (false, _, _) => {
            ui.label("No current: no electron emission.");
        }
    }

    ui.add_space(12.0);
    energy_plot(ui, result);
    ui.add_space(8.0);
    current_plot(ui, result);
}

/// Bar chart of photon energy vs work function vs kinetic energy.
fn energy_plot(ui: &mut Ui, result: &ComputationResult) {
    let bar = |x: f64, value: f64, name: &str, color: egui::Color32| {
        egui_plot::BarChart::new(vec![egui_plot::Bar::new(x, value).width(0.6)])
            .name(name)
            .color(color)
    };

    let photon = bar(
        0.0,
        result.photon_energy_ev,
        "E_photon",
        egui::Color32::from_rgb(50, 120, 220),
    );
    let work = bar(
        1.0,
        result.work_function_ev,
        "Φ",
        egui::Color32::from_rgb(220, 100, 50),
    );
    // Negative kinetic energy is not drawn below the axis.
    let kinetic = bar(
        2.0,
        result.kinetic_energy_ev.max(0.0),
        "k",
        egui::Color32::from_rgb(50, 180, 80),
    );

    egui_plot::Plot::new("energy_plot")
        .height(240.0)
        .y_axis_label("Energy (eV)")
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(photon);
            plot_ui.bar_chart(work);
            plot_ui.bar_chart(kinetic);
        });
}

/// Bar chart of the normalized current fraction on a fixed [0, 1] axis.
fn current_plot(ui: &mut Ui, result: &ComputationResult) {
    let fraction = result.current_fraction.unwrap_or(0.0);

    let chart = egui_plot::BarChart::new(vec![egui_plot::Bar::new(0.0, fraction).width(0.5)])
        .name("Current fraction")
        .color(egui::Color32::from_rgb(150, 80, 220));

    egui_plot::Plot::new("current_plot")
        .height(200.0)
        .include_y(1.0)
        .y_axis_label("Current fraction")
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
