use eframe::egui;
use egui::{Layout, RichText};

use crate::engine::chat::ChatSession;
use crate::model::message::{ChatMessage, ChatRole};
use crate::ui::app::{bubble, ChatWidgetState, Theme};

pub enum ChatIntent {
    Send,
    StopWaiting,
}

/// Floating assistant: a launcher button, or the open chat window.
pub fn draw_chat(
    ctx: &egui::Context,
    session: &ChatSession,
    state: &mut ChatWidgetState,
    theme: &Theme,
) -> Option<ChatIntent> {
    if !state.open {
        egui::Area::new(egui::Id::new("chat_launcher"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -64.0))
            .show(ctx, |ui| {
                let launcher = egui::Button::new(
                    RichText::new("💬  Assistant").strong().color(egui::Color32::WHITE),
                )
                .fill(theme.primary)
                .corner_radius(egui::CornerRadius::same(20))
                .min_size(egui::vec2(140.0, 40.0));

                if ui.add(launcher).clicked() {
                    state.open = true;
                }
            });
        return None;
    }

    let input_id = egui::Id::new("chat_input_box");
    let mut intent = None;
    let mut open = true;

    egui::Window::new("🤖 Assistant")
        .open(&mut open)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -64.0))
        .default_size(egui::vec2(360.0, 480.0))
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(380.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in session.transcript() {
                        draw_message(ui, theme, msg);
                    }
                    if session.is_loading() {
                        ui.label(
                            RichText::new("Assistant is typing...")
                                .italics()
                                .small()
                                .color(theme.muted),
                        );
                    }
                    if state.should_auto_scroll {
                        ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.input)
                        .id(input_id)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if session.is_loading() {
                    if ui.small_button("Stop").on_hover_text("Stop waiting for a reply").clicked() {
                        intent = Some(ChatIntent::StopWaiting);
                    }
                } else if ui.button("➤").clicked() || enter {
                    intent = Some(ChatIntent::Send);
                    ui.memory_mut(|m| m.request_focus(input_id));
                }
            });
        });

    state.should_auto_scroll = false;
    if !open {
        state.open = false;
    }
    intent
}

fn draw_message(ui: &mut egui::Ui, theme: &Theme, msg: &ChatMessage) {
    ui.add_space(6.0);
    match msg.role {
        ChatRole::User => {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
                bubble(ui, theme.user_bubble, egui::Color32::WHITE, &msg.text);
            });
        }
        ChatRole::Assistant => {
            bubble(ui, theme.assistant_bubble, theme.text, &msg.text);
        }
    }
}
