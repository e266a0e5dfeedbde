use eframe::egui;
use egui::RichText;

use crate::engine::shell::{Shell, ShellAction, View};
use crate::ui::app::{right_aligned, Theme};

pub fn logo(ui: &mut egui::Ui, theme: &Theme) -> egui::Response {
    ui.add(
        egui::Label::new(
            RichText::new("◆ SportSync")
                .size(20.0)
                .strong()
                .color(theme.primary),
        )
        .sense(egui::Sense::click()),
    )
}

pub fn draw_header(
    ctx: &egui::Context,
    shell: &Shell,
    theme: &Theme,
    actions: &mut Vec<ShellAction>,
) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme.card)
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if logo(ui, theme).clicked() {
                    actions.push(ShellAction::Navigate(View::Home));
                }

                ui.add_space(32.0);

                for view in View::NAV {
                    let active = shell.view() == view;
                    let label = RichText::new(view.label().to_uppercase())
                        .strong()
                        .color(if active { theme.primary } else { theme.muted });
                    if ui.add(egui::Button::new(label).frame(false)).clicked() {
                        actions.push(ShellAction::Navigate(view));
                    }
                }

                right_aligned(ui, |ui| {
                    if ui.button("👤").on_hover_text("Profile").clicked() {
                        actions.push(ShellAction::Navigate(View::Profile));
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Authenticated").small().color(theme.muted));
                        ui.label(RichText::new("John Doe").strong().color(theme.text));
                    });
                });
            });
        });
}

pub fn draw_footer(ctx: &egui::Context, theme: &Theme, actions: &mut Vec<ShellAction>) {
    let subscribe_id = egui::Id::new("footer_subscribe_email");

    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::new()
                .fill(theme.card)
                .inner_margin(egui::Margin::symmetric(24, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("SportSync").strong().color(theme.primary));
                ui.label(
                    RichText::new("Redefining facility access with minimalist efficiency.")
                        .small()
                        .color(theme.muted),
                );

                ui.separator();

                if ui.link("Arenas").clicked() {
                    actions.push(ShellAction::Navigate(View::Home));
                }
                if ui.link("Events").clicked() {
                    actions.push(ShellAction::Navigate(View::Community));
                }
                if ui.link("About Us").clicked() {
                    actions.push(ShellAction::Navigate(View::About));
                }

                right_aligned(ui, |ui| {
                    // Decorative; nothing is sent anywhere.
                    let mut email = ui
                        .data_mut(|d| d.get_temp::<String>(subscribe_id))
                        .unwrap_or_default();
                    let subscribed = ui.button("Subscribe").clicked();
                    ui.add(
                        egui::TextEdit::singleline(&mut email)
                            .hint_text("athlete@example.com")
                            .desired_width(180.0),
                    );
                    if subscribed {
                        log::info!("Subscribe clicked (no delivery configured)");
                        email.clear();
                    }
                    ui.data_mut(|d| d.insert_temp(subscribe_id, email));
                });
            });
        });
}
