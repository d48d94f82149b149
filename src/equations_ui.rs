//! Equations sidebar
//!
//! egui panel listing the closed-form expressions behind the visualization

use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw a styled equation sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(280.0)
        .max_width(350.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(RichText::new("Equations").strong().color(Color32::from_rgb(255, 200, 100)));
            ui.add_space(5.0);

            for eq in equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(RichText::new("Variables").strong().color(Color32::from_rgb(255, 200, 100)));
            ui.add_space(5.0);

            for (symbol, meaning) in variables {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(*symbol).color(Color32::from_rgb(150, 255, 150))
                        .font(FontId::new(14.0, FontFamily::Monospace)));
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }
        });
}

/// Draw a single equation with name, formula, and description
fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255))
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

pub const ORBITAL_EQUATIONS: &[Equation] = &[
    Equation {
        name: "s Orbital",
        formula: "ψ_s = e^(-r)",
        description: "Spherically symmetric cloud",
    },
    Equation {
        name: "p Orbital",
        formula: "ψ_p = x·e^(-r)",
        description: "Dumbbell along the chosen axis",
    },
    Equation {
        name: "d Orbital (x²-y²)",
        formula: "ψ_d = (x²-y²)·e^(-r)",
        description: "Four-lobed cloverleaf",
    },
    Equation {
        name: "d Orbital (z²)",
        formula: "ψ_d = (2z²-x²-y²)·e^(-r)",
        description: "Lobes along z with a ring",
    },
    Equation {
        name: "Normalization",
        formula: "t = (ψ - min)/(max - min)",
        description: "Maps the field to [0, 1]",
    },
    Equation {
        name: "View Rotation",
        formula: "P' = R_x(θx)·R_y(θy)·P",
        description: "Euler rotation before projection",
    },
    Equation {
        name: "Molecular Vibration",
        formula: "Δz = A·sin(ωt)",
        description: "Oscillates the sampling plane",
    },
];

pub const ORBITAL_VARIABLES: &[(&str, &str)] = &[
    ("r", "Distance from the nucleus"),
    ("t", "Normalized field intensity"),
    ("θx, θy", "View rotation angles"),
    ("A", "Vibration amplitude"),
    ("ω", "Vibration angular speed"),
    ("P", "Sample point (x, y, height)"),
];
