//! Spectrum figure: both energies against wavelength on a log scale

use common::chart::{Axis, Chart, Scale};
use common::equations_ui::draw_equations_sidebar;
use common::{Figure, PhysicsResult, PHYSICAL};
use egui::{Color32, RichText};

use crate::equations_ui::{OSCILLATOR_EQUATIONS, OSCILLATOR_VARIABLES};
use crate::report::highlight_summary;
use crate::sweep::{spectrum, Spectrum};
use crate::SpectrumConfig;

const ZERO_POINT_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const THERMAL_COLOR: Color32 = Color32::from_rgb(214, 39, 40);
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(44, 160, 44);

pub struct SpectrumFigure {
    config: SpectrumConfig,
    spectrum: Spectrum,
    /// Set when the last slider move could not be evaluated
    error: Option<String>,
}

impl SpectrumFigure {
    pub fn new(config: SpectrumConfig) -> PhysicsResult<Self> {
        let spectrum = spectrum(&config)?;
        Ok(Self {
            config,
            spectrum,
            error: None,
        })
    }

    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Re-sweep at a new temperature. On failure the previous curves stay.
    pub fn set_temperature(&mut self, temperature: f64) {
        let config = SpectrumConfig {
            temperature,
            ..self.config.clone()
        };
        match spectrum(&config) {
            Ok(spectrum) => {
                self.config = config;
                self.spectrum = spectrum;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Temperature {temperature} K rejected: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn chart(&self) -> Chart {
        let s = &self.spectrum;
        let (start, stop) = self.config.wavelength_nm;
        let x = Axis::linear("Wavelength (nm)", start, stop);
        let y = Axis::fit(
            "Energy (eV)",
            s.zero_point_ev.iter().chain(s.thermal_ev.iter()).copied(),
            Scale::Log10,
        );

        let highlight_nm = self.config.highlight_nm();
        let highlight = &s.highlight;
        Chart::new(
            format!(
                "Comparison: Zero-point energy vs Thermal energy ({:.0}K)",
                s.temperature
            ),
            x,
            y,
        )
        .line(
            Some("Zero-point energy (E₀)".into()),
            s.zero_point_points(),
            ZERO_POINT_COLOR,
        )
        .line(
            Some(format!("Thermal energy ({:.0}K)", s.temperature)),
            s.thermal_points(),
            THERMAL_COLOR,
        )
        .vline(
            highlight_nm,
            Some(format!(
                "{:.0} Å ({:.0} nm)",
                self.config.highlight_angstrom, highlight_nm
            )),
            HIGHLIGHT_COLOR,
        )
        .marker([highlight_nm, highlight.zero_point_ev()], ZERO_POINT_COLOR)
        .marker([highlight_nm, highlight.thermal_ev()], THERMAL_COLOR)
        .info(highlight_summary(highlight))
    }
}

impl Figure for SpectrumFigure {
    fn show(&mut self, ctx: &egui::Context) {
        draw_equations_sidebar(
            ctx,
            "Zero-point vs Thermal",
            OSCILLATOR_EQUATIONS,
            OSCILLATOR_VARIABLES,
            Some(&PHYSICAL),
        );

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (lo, hi) = self.config.temperature_range;
                let mut temperature = self.config.temperature;
                let slider = ui.add(
                    egui::Slider::new(&mut temperature, lo..=hi)
                        .logarithmic(true)
                        .suffix(" K")
                        .text("Temperature"),
                );
                if slider.changed() {
                    self.set_temperature(temperature);
                }

                ui.separator();
                ui.label(format!(
                    "ħω/kT at {:.0} nm: {:.1}",
                    self.config.highlight_nm(),
                    self.spectrum.highlight.exponent
                ));
                if let Some(e) = &self.error {
                    ui.label(RichText::new(e).color(Color32::RED));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            self.chart().show(ui, size);
        });
    }
}
