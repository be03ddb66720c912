//! Potential figure: V(k) per radius next to V(r) per exponent

use common::chart::{Axis, Chart, Scale, PALETTE};
use common::equations_ui::draw_equations_sidebar;
use common::Figure;
use egui::{vec2, RichText};

use crate::equations_ui::{POTENTIAL_EQUATIONS, POTENTIAL_VARIABLES};
use crate::sweep::{Curve, PotentialSweep};

pub struct PotentialFigure {
    sweep: PotentialSweep,
    log_scale: bool,
}

impl PotentialFigure {
    pub fn new(sweep: PotentialSweep) -> Self {
        Self {
            sweep,
            log_scale: false,
        }
    }

    fn scale(&self) -> Scale {
        if self.log_scale {
            Scale::Log10
        } else {
            Scale::Linear
        }
    }

    pub fn exponent_chart(&self) -> Chart {
        curve_chart(
            "V(k) for distinct radius r",
            "Exponent (k)",
            "V(k)",
            &self.sweep.exponent_curves,
            self.scale(),
        )
    }

    pub fn radius_chart(&self) -> Chart {
        curve_chart(
            "V(r) for distinct exponents x",
            "Radius (r)",
            "V(r)",
            &self.sweep.radius_curves,
            self.scale(),
        )
    }
}

fn curve_chart(title: &str, x_label: &str, y_label: &str, curves: &[Curve], scale: Scale) -> Chart {
    let points = || curves.iter().flat_map(|c| c.points.iter());
    let (x_min, x_max) = points().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p[0]), hi.max(p[0]))
    });
    let x = Axis::linear(x_label, x_min, x_max);
    let y = Axis::fit(y_label, points().map(|p| p[1]), scale);

    curves
        .iter()
        .enumerate()
        .fold(Chart::new(title, x, y), |chart, (i, curve)| {
            chart.line(Some(curve.label.clone()), curve.points.clone(), PALETTE[i % PALETTE.len()])
        })
}

impl Figure for PotentialFigure {
    fn show(&mut self, ctx: &egui::Context) {
        draw_equations_sidebar(
            ctx,
            "Power-law Potential",
            POTENTIAL_EQUATIONS,
            POTENTIAL_VARIABLES,
            None,
        );

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("V(r, x) = v·(r/a)ˣ").strong());
                ui.separator();
                ui.label(format!("{} table entries", self.sweep.table.len()));
                ui.separator();
                ui.checkbox(&mut self.log_scale, "Logarithmic V axis");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let size = vec2((available.x - ui.spacing().item_spacing.x) / 2.0, available.y);
            ui.horizontal(|ui| {
                self.exponent_chart().show(ui, size);
                self.radius_chart().show(ui, size);
            });
        });
    }
}
