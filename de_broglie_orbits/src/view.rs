//! Orbit figure: the two unstable cases, a speed explorer, and the wave-count chart

use common::chart::{paint_text_box, Axis, Bar, Chart};
use common::equations_ui::draw_equations_sidebar;
use common::{Figure, PhysicsResult, PHYSICAL};
use egui::{pos2, vec2, Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Ui, Vec2};
use glam::DVec2;

use crate::atom::{bohr_velocity, AtomState};
use crate::cases::{comparison, OrbitCase, OrbitComparison};
use crate::equations_ui::{ORBIT_EQUATIONS, ORBIT_VARIABLES};
use crate::orbit::OrbitGeometry;
use crate::report::case_block;
use crate::OrbitConfig;

const NUCLEUS_COLOR: Color32 = Color32::from_rgb(230, 40, 40);
const ORBIT_COLOR: Color32 = Color32::from_rgb(60, 110, 255);
const WAVE_COLOR: Color32 = Color32::from_rgb(40, 200, 80);
const TITLE_COLOR: Color32 = Color32::from_rgb(220, 220, 225);
const BAR_COLORS: [Color32; 2] = [
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(255, 0, 0),
];

/// Wave counts closer than this to a whole number count as a standing wave
const STANDING_TOLERANCE: f64 = 0.02;

struct Panel {
    title: String,
    state: AtomState,
    geometry: OrbitGeometry,
}

impl Panel {
    fn new(title: String, state: AtomState, config: &OrbitConfig) -> PhysicsResult<Self> {
        let geometry = OrbitGeometry::new(&state, config.wave_samples, config.wave_amplitude)?;
        Ok(Self {
            title,
            state,
            geometry,
        })
    }
}

pub struct OrbitFigure {
    config: OrbitConfig,
    reference_velocity: f64,
    cases: Vec<Panel>,
    comparison: Vec<OrbitComparison>,
    explorer_factor: f64,
    explorer: PhysicsResult<Panel>,
}

impl OrbitFigure {
    pub fn new(config: OrbitConfig, cases: &[OrbitCase]) -> PhysicsResult<Self> {
        let reference_velocity = bohr_velocity(config.quantum_number)?;
        let panels = cases
            .iter()
            .map(|case| {
                Panel::new(
                    format!("{}\n{}", case.title, case.caption),
                    case.state,
                    &config,
                )
            })
            .collect::<PhysicsResult<Vec<_>>>()?;

        let explorer_factor = cases.first().map_or(1.0, |c| c.factor);
        let explorer = explorer_panel(&config, reference_velocity, explorer_factor);

        Ok(Self {
            config,
            reference_velocity,
            cases: panels,
            comparison: comparison(cases),
            explorer_factor,
            explorer,
        })
    }

    /// Rebuild the explorer view for a new speed factor
    pub fn set_explorer_factor(&mut self, factor: f64) {
        self.explorer_factor = factor;
        self.explorer = explorer_panel(&self.config, self.reference_velocity, factor);
        if let Err(e) = &self.explorer {
            log::warn!("Explorer speed factor {factor} rejected: {e}");
        }
    }

    pub fn explorer_state(&self) -> Option<&AtomState> {
        self.explorer.as_ref().ok().map(|panel| &panel.state)
    }

    pub fn comparison_chart(&self) -> Chart {
        let bars = self
            .comparison
            .iter()
            .enumerate()
            .map(|(i, c)| Bar {
                category: c.label.to_string(),
                value: c.wave_count,
                color: BAR_COLORS[i % BAR_COLORS.len()],
                annotation: Some(format!("{:.2} waves", c.wave_count)),
            })
            .collect();

        let mut chart = Chart::bars(
            "Relationship between orbital speed and number of waves",
            "Number of wavelengths in the orbit",
            "Type of Speed",
            bars,
        )
        .hline(1.0, Some("Stability condition".into()), ORBIT_COLOR);

        // Leave headroom above the tallest bar for its label.
        let top = self
            .comparison
            .iter()
            .map(|c| c.wave_count)
            .fold(1.0, f64::max);
        chart.y = Axis::linear(chart.y.label.clone(), 0.0, top * 1.2);
        chart
    }
}

fn explorer_panel(
    config: &OrbitConfig,
    reference_velocity: f64,
    factor: f64,
) -> PhysicsResult<Panel> {
    let state = AtomState::recompute(config.quantum_number, reference_velocity * factor)?;
    Panel::new(format!("Explorer\nv = {factor:.2} × Bohr speed"), state, config)
}

fn paint_atom_view(ui: &mut Ui, size: Vec2, panel: &Panel) {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    painter.text(
        pos2(rect.center().x, rect.top() + 4.0),
        Align2::CENTER_TOP,
        &panel.title,
        FontId::proportional(14.0),
        TITLE_COLOR,
    );

    let body = egui::Rect::from_min_max(rect.min + vec2(0.0, 44.0), rect.max);
    let side = body.height().min(body.width() * 0.55);
    if side <= 0.0 {
        return;
    }
    let center = pos2(body.left() + side / 2.0, body.center().y);
    let scale = f64::from(side / 2.0) / panel.geometry.extent();
    let to_screen = |p: DVec2| {
        pos2(
            center.x + (p.x * scale) as f32,
            center.y - (p.y * scale) as f32,
        )
    };

    painter.circle_filled(
        center,
        (panel.geometry.nucleus_radius * scale) as f32,
        NUCLEUS_COLOR.gamma_multiply(0.8),
    );
    painter.circle_stroke(
        center,
        (panel.geometry.radius * scale) as f32,
        Stroke::new(2.0, ORBIT_COLOR.gamma_multiply(0.7)),
    );
    painter.add(Shape::line(
        panel.geometry.wave.iter().map(|p| to_screen(*p)).collect(),
        Stroke::new(2.0, WAVE_COLOR.gamma_multiply(0.8)),
    ));
    for node in &panel.geometry.nodes {
        painter.circle_filled(to_screen(*node), 4.0, NUCLEUS_COLOR.gamma_multiply(0.7));
    }

    paint_text_box(
        &painter,
        pos2(body.left() + side + 8.0, body.center().y - 36.0),
        &case_block(&panel.state),
    );
}

impl Figure for OrbitFigure {
    fn show(&mut self, ctx: &egui::Context) {
        draw_equations_sidebar(
            ctx,
            "Bohr Orbits",
            ORBIT_EQUATIONS,
            ORBIT_VARIABLES,
            Some(&PHYSICAL),
        );

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(first) = self.cases.first() {
                    ui.label(format!(
                        "n = {}   r = {:.3e} m   E = {:.2} eV",
                        first.state.quantum_number,
                        first.state.radius,
                        first.state.energy_ev()
                    ));
                }
                ui.separator();

                let (lo, hi) = self.config.explorer_range;
                let mut factor = self.explorer_factor;
                let slider = ui.add(
                    egui::Slider::new(&mut factor, lo..=hi).text("Explorer speed factor"),
                );
                if slider.changed() {
                    self.set_explorer_factor(factor);
                }

                if let Some(state) = self.explorer_state() {
                    if state.is_standing_wave(STANDING_TOLERANCE) {
                        ui.label(RichText::new("standing wave").color(Color32::LIGHT_GREEN));
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let gap = ui.spacing().item_spacing.x;
            let view_size = vec2((available.x - 2.0 * gap) / 3.0, available.y * 0.55);

            ui.horizontal(|ui| {
                for panel in &self.cases {
                    paint_atom_view(ui, view_size, panel);
                }
                match &self.explorer {
                    Ok(panel) => paint_atom_view(ui, view_size, panel),
                    Err(e) => {
                        ui.colored_label(Color32::RED, e.to_string());
                    }
                }
            });

            let chart_size = vec2(available.x, ui.available_height());
            self.comparison_chart().show(ui, chart_size);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::unstable_cases;

    fn figure() -> OrbitFigure {
        let config = OrbitConfig::default();
        let cases = unstable_cases(&config).unwrap();
        OrbitFigure::new(config, &cases).unwrap()
    }

    #[test]
    fn chart_labels_match_wave_counts() {
        let chart = figure().comparison_chart();
        let annotations: Vec<_> = chart
            .bars
            .iter()
            .map(|b| b.annotation.clone().unwrap())
            .collect();
        assert_eq!(annotations, vec!["0.60 waves", "1.80 waves"]);
        assert_eq!(chart.guides.len(), 1);
        assert_eq!(chart.guides[0].value, 1.0);
        assert!(chart.y.max >= 1.8);
    }

    #[test]
    fn explorer_starts_on_case_a_and_rebinds() {
        let mut figure = figure();
        let start = *figure.explorer_state().unwrap();
        assert!((start.wave_count - 1.8).abs() < 1e-3);

        figure.set_explorer_factor(1.0);
        let bohr = *figure.explorer_state().unwrap();
        assert!(bohr.is_standing_wave(STANDING_TOLERANCE));
        assert_eq!(bohr.radius, start.radius);
    }

    #[test]
    fn zero_factor_leaves_explorer_in_error() {
        let mut figure = figure();
        figure.set_explorer_factor(0.0);
        assert!(figure.explorer_state().is_none());
    }
}
