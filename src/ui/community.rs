use eframe::egui;
use egui::RichText;

use crate::model::tournament::featured_events;
use crate::ui::app::{card, primary_button, Theme};

const EVENT_BLURB: &str = "Elite local competition held at prime facilities. Open to all skill levels with pro categorization.";

pub fn draw_community(ui: &mut egui::Ui, theme: &Theme) {
    ui.label(RichText::new("COMMUNITY HUB").small().strong().color(theme.accent));
    ui.label(RichText::new("Local Events.").size(40.0).strong().color(theme.text));
    ui.label(
        RichText::new("Join tournaments, find pickup groups, and scale your game with local athletes.")
            .color(theme.muted),
    );
    ui.add_space(8.0);
    if primary_button(ui, theme, "Post Event").clicked() {
        log::info!("Post Event clicked (not available in this demo)");
    }
    ui.add_space(16.0);

    for (i, event) in featured_events().iter().enumerate() {
        ui.push_id(&event.id, |ui| card(ui, theme, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Featured").small().strong().color(theme.accent));
                ui.label(RichText::new(event.date_label()).small().color(theme.muted));
                ui.label(RichText::new(event.sport.label()).small().color(theme.muted));
                ui.label(RichText::new(event.status.label()).small().color(theme.accent));
            });
            ui.label(RichText::new(&event.title).size(24.0).strong().color(theme.text));
            ui.label(RichText::new(EVENT_BLURB).color(theme.muted));

            ui.horizontal(|ui| {
                for url in event.avatar_urls(i) {
                    ui.add(
                        egui::Image::new(url)
                            .fit_to_exact_size(egui::vec2(28.0, 28.0))
                            .corner_radius(egui::CornerRadius::same(14)),
                    );
                }
                ui.label(RichText::new(format!("{}+ Joined", event.joined)).small().strong());
                crate::ui::app::right_aligned(ui, |ui| {
                    let _ = ui.button("Details →");
                });
            });
        }));
        ui.add_space(12.0);
    }
}
