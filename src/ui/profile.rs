use eframe::egui;
use egui::RichText;

use crate::engine::shell::Shell;
use crate::ui::app::{card, primary_button, ProfileState, Theme};
use crate::ui::settings::{MAX_UI_SCALE, MIN_UI_SCALE};

pub enum ProfileRequest {
    Save,
    TestConnection,
}

pub fn draw_profile(
    ui: &mut egui::Ui,
    shell: &Shell,
    theme: &Theme,
    state: &mut ProfileState,
) -> Option<ProfileRequest> {
    let mut request = None;

    card(ui, theme, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("John Doe").size(32.0).strong().color(theme.text));
            ui.label(RichText::new("Athlete Profile • EST 2024").color(theme.muted));
            ui.add_space(12.0);

            egui::Grid::new("profile_stats").num_columns(2).spacing(egui::vec2(48.0, 4.0)).show(ui, |ui| {
                ui.label(RichText::new("Sessions").small().color(theme.muted));
                ui.label(RichText::new("Activity Score").small().color(theme.muted));
                ui.end_row();
                ui.label(RichText::new(format!("{}", 14 + shell.ledger().len())).size(28.0).strong());
                ui.label(RichText::new("950").size(28.0).strong());
                ui.end_row();
            });
        });
    });

    ui.add_space(16.0);

    card(ui, theme, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Bookings this session").size(18.0).strong());
        if shell.ledger().is_empty() {
            ui.label(RichText::new("None yet.").color(theme.muted));
        }
        for record in shell.ledger().iter().rev() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&record.confirmation_number).monospace());
                ui.label(record.court_name);
                ui.label(RichText::new(record.selection.display()).color(theme.muted));
                ui.label(record.amount_label());
            });
        }
    });

    ui.add_space(16.0);

    card(ui, theme, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Settings").size(18.0).strong());
        ui.add_space(6.0);

        let draft = &mut state.draft;
        egui::Grid::new("settings_grid").num_columns(2).spacing(egui::vec2(16.0, 6.0)).show(ui, |ui| {
            ui.label("UI Scale");
            ui.add(egui::Slider::new(&mut draft.ui_scale, MIN_UI_SCALE..=MAX_UI_SCALE));
            ui.end_row();

            ui.label("Receipt email");
            ui.text_edit_singleline(&mut draft.contact_email);
            ui.end_row();

            ui.label("Assistant endpoint");
            ui.text_edit_singleline(&mut draft.llm.endpoint);
            ui.end_row();

            ui.label("Model");
            ui.text_edit_singleline(&mut draft.llm.model);
            ui.end_row();

            ui.label("Temperature");
            ui.add(egui::Slider::new(&mut draft.llm.temperature, 0.0..=2.0));
            ui.end_row();

            ui.label("Timeout (s)");
            ui.add(egui::DragValue::new(&mut draft.llm.timeout_secs).range(1..=300));
            ui.end_row();

            ui.label("API key");
            let mut key = draft.llm.api_key.clone().unwrap_or_default();
            if ui
                .add(egui::TextEdit::singleline(&mut key).password(true).hint_text("from environment if empty"))
                .changed()
            {
                draft.llm.api_key = Some(key).filter(|k| !k.trim().is_empty());
            }
            ui.end_row();
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if primary_button(ui, theme, "Save").clicked() {
                request = Some(ProfileRequest::Save);
            }
            if ui.button("Test connection").clicked() {
                request = Some(ProfileRequest::TestConnection);
            }
        });

        if let Some(status) = &state.connection_status {
            ui.label(RichText::new(status).color(theme.muted));
        }
        if let Some(notice) = &state.notice {
            ui.label(RichText::new(notice).color(theme.muted));
        }
    });

    request
}
