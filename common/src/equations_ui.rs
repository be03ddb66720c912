//! Equations sidebar UI
//!
//! Displays the formulas an exercise evaluates, its variables, and the
//! physical constants it reads.

use egui::{Color32, Context, RichText};

use crate::constants::PhysicalConstants;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw the equations sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
    constants: Option<&PhysicalConstants>,
) {
    egui::SidePanel::right("equations_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in equations {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
                    egui::Grid::new("variables_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in variables {
                                ui.label(
                                    RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN),
                                );
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });

                if let Some(constants) = constants {
                    ui.add_space(8.0);
                    ui.collapsing(RichText::new("🔢 Constants").strong(), |ui| {
                        egui::Grid::new("constants_grid")
                            .num_columns(3)
                            .spacing([10.0, 4.0])
                            .show(ui, |ui| {
                                for (symbol, value, unit) in constants.entries() {
                                    ui.label(
                                        RichText::new(symbol)
                                            .monospace()
                                            .color(Color32::LIGHT_GREEN),
                                    );
                                    ui.label(RichText::new(format!("{value:.4e}")).monospace());
                                    ui.label(unit);
                                    ui.end_row();
                                }
                            });
                    });
                }
            });
        });
}
