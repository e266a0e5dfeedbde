use eframe::egui;
use egui::RichText;

use crate::ui::app::{card, section_heading, Theme};

struct Feature {
    label: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature { label: "Calendar", desc: "Real-time sync" },
    Feature { label: "Maps", desc: "Geo-integration" },
    Feature { label: "Payments", desc: "Secure checkout" },
    Feature { label: "Community", desc: "Tournament brackets" },
];

const RELEASE_CRITERIA: [&str; 3] = [
    "Seamless Search-to-Booking Flow",
    "Confirmation Email < 2 Minutes",
    "Zero-Error Checkout Rate",
];

/// The pitch deck, one card per slide.
pub fn draw_about(ui: &mut egui::Ui, theme: &Theme) {
    slide(ui, theme, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("SportSync").size(56.0).strong().color(theme.text));
            ui.label(
                RichText::new("Seamless Booking for Active Lifestyles")
                    .size(18.0)
                    .color(theme.muted),
            );
            ui.label(RichText::new("Team Venture • EST. 2024").small().color(theme.accent));
        });
    });

    slide(ui, theme, |ui| {
        ui.columns(2, |cols| {
            cols[0].label(RichText::new("The Problem").small().color(theme.accent));
            cols[0].label(RichText::new("Friction in Play").size(26.0).strong());
            cols[0].label(
                "Booking local courts (Badminton, Pickleball, Basketball) is tedious. Relies on outdated Facebook searches, endless manual calls, and insecure bank transfers.",
            );

            cols[1].label(RichText::new("The Solution").small().color(theme.accent));
            cols[1].label(RichText::new("Centralized Flow").size(26.0).strong());
            cols[1].label(
                "A centralized web platform for instant, real-time booking. Connecting athletes with facility owners seamlessly without the administrative headache.",
            );
        });
    });

    slide(ui, theme, |ui| {
        section_heading(
            ui,
            theme,
            "Team Venture",
            "Ensuring a smooth experience from login to checkout.",
        );
        ui.horizontal(|ui| {
            for (name, role) in [
                ("Member 1", "Frontend & Design Lead"),
                ("Member 2", "Backend & Systems Architect"),
            ] {
                card(ui, theme, |ui| {
                    ui.set_min_width(220.0);
                    ui.label(RichText::new(name).size(18.0).strong());
                    ui.label(RichText::new(role).color(theme.muted));
                });
            }
        });
    });

    slide(ui, theme, |ui| {
        ui.label(RichText::new("AI Powered Design.").size(32.0).strong());
        ui.label(
            RichText::new("Utilizing Gemini AI to refine code, improve workflow efficiency, and ensure clean final output.")
                .color(theme.muted),
        );
        ui.add_space(8.0);
        for (label, level) in [("Refinement", 0.9), ("Efficiency", 0.75)] {
            ui.label(RichText::new(label).small().color(theme.muted));
            ui.add(egui::ProgressBar::new(level).desired_width(320.0));
        }
        ui.add_space(8.0);
        ui.label(RichText::new("SDG Goal #3").size(20.0).strong());
        ui.label(
            "Good Health and Well-being. Encouraging physical activity by removing booking friction across local communities.",
        );
    });

    slide(ui, theme, |ui| {
        section_heading(
            ui,
            theme,
            "Market & Personas",
            "Rising popularity of modern sports vs. outdated pen-and-paper scheduling.",
        );
        ui.columns(2, |cols| {
            persona(
                &mut cols[0],
                theme,
                "The Players",
                "Persona: Student Alex",
                "Hobbyist athlete looking for quick pickup games between classes. Values speed and mobile access.",
            );
            persona(
                &mut cols[1],
                theme,
                "The Owners",
                "Persona: Manager Mike",
                "Local business owner needing streamlined schedule management. Values reliability and payment security.",
            );
        });
    });

    slide(ui, theme, |ui| {
        ui.horizontal(|ui| {
            for f in &FEATURES {
                card(ui, theme, |ui| {
                    ui.set_min_width(150.0);
                    ui.label(RichText::new(f.label).size(18.0).strong());
                    ui.label(RichText::new(f.desc).small().color(theme.muted));
                });
            }
        });
    });

    slide(ui, theme, |ui| {
        ui.label(RichText::new("Strategic Growth.").size(32.0).strong());
        ui.label(RichText::new("Target: Digitize 50% of local courts.").color(theme.muted));
        ui.add_space(8.0);
        ui.label(RichText::new("Release Criteria").strong());
        for item in RELEASE_CRITERIA {
            ui.label(format!("✔ {item}"));
        }
    });
}

fn slide(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui)) {
    card(ui, theme, |ui| {
        ui.set_width(ui.available_width());
        ui.add_space(24.0);
        add_contents(ui);
        ui.add_space(24.0);
    });
    ui.add_space(16.0);
}

fn persona(ui: &mut egui::Ui, theme: &Theme, heading: &str, name: &str, blurb: &str) {
    ui.label(RichText::new(heading).size(20.0).strong());
    ui.label(RichText::new(name).small().color(theme.accent));
    ui.label(RichText::new(blurb).color(theme.muted));
}
