use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use eframe::egui;
use egui::{Layout, RichText};
use log::{error, warn};

use crate::engine::chat::ChatSession;
use crate::engine::engine::Engine;
use crate::engine::llm_client::build_generator;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::shell::{Shell, ShellAction, View};
use crate::ui::settings::AppSettings;
use crate::ui::settings_io::save_settings;
use crate::ui::{about, booking, chat_widget, community, header, home, profile};

/* =========================
   Theme
   ========================= */

#[derive(Clone)]
pub struct Theme {
    pub primary: egui::Color32,
    pub surface: egui::Color32,
    pub card: egui::Color32,
    pub border: egui::Color32,
    pub text: egui::Color32,
    pub muted: egui::Color32,
    pub accent: egui::Color32,
    pub user_bubble: egui::Color32,
    pub assistant_bubble: egui::Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: egui::Color32::from_rgb(30, 41, 59),
            surface: egui::Color32::from_rgb(248, 250, 252),
            card: egui::Color32::WHITE,
            border: egui::Color32::from_rgb(226, 232, 240),
            text: egui::Color32::from_rgb(15, 23, 42),
            muted: egui::Color32::from_rgb(100, 116, 139),
            accent: egui::Color32::from_rgb(71, 85, 105),
            user_bubble: egui::Color32::from_rgb(30, 41, 59),
            assistant_bubble: egui::Color32::WHITE,
        }
    }
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct ChatWidgetState {
    pub open: bool,
    pub input: String,
    pub should_auto_scroll: bool,
}

#[derive(Default)]
pub struct ProfileState {
    /// Edited copy; only applied on Save
    pub draft: AppSettings,
    pub connection_status: Option<String>,
    pub notice: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct SportSyncApp {
    shell: Shell,
    chat: ChatSession,
    chat_ui: ChatWidgetState,
    settings: AppSettings,
    profile: ProfileState,
    notice: Option<String>,
    theme: Theme,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl SportSyncApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        Engine::new(cmd_rx, resp_tx, build_generator(&settings.llm)).spawn();

        Self {
            shell: Shell::with_system_clock(settings.contact_email.clone()),
            chat: ChatSession::default(),
            chat_ui: ChatWidgetState::default(),
            profile: ProfileState {
                draft: settings.clone(),
                ..Default::default()
            },
            settings,
            notice: None,
            theme: Theme::default(),
            cmd_tx,
            resp_rx,
        }
    }

    fn send_command(&mut self, cmd: EngineCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            error!("Engine thread is gone; command dropped");
        }
    }

    fn drain_responses(&mut self) {
        loop {
            match self.resp_rx.try_recv() {
                Ok(EngineResponse::ChatReply { seq, result }) => {
                    if self.chat.receive(seq, result) {
                        self.chat_ui.should_auto_scroll = true;
                    }
                }
                Ok(EngineResponse::ConnectionStatus(status)) => {
                    self.profile.connection_status = Some(status);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Engine response channel disconnected");
                    break;
                }
            }
        }
    }

    fn send_chat(&mut self) {
        let input = std::mem::take(&mut self.chat_ui.input);
        match self.chat.submit(&input) {
            Some(req) => {
                self.send_command(EngineCommand::SendChat {
                    seq: req.seq,
                    text: req.text,
                });
                self.chat_ui.should_auto_scroll = true;
            }
            // keep what the user typed while a reply is pending
            None if self.chat.is_loading() => self.chat_ui.input = input,
            None => {}
        }
    }

    fn apply_settings(&mut self) {
        let next = self.profile.draft.clone().sanitized();
        self.profile.draft = next.clone();

        if next.llm != self.settings.llm {
            self.send_command(EngineCommand::ReplaceGenerator(build_generator(&next.llm)));
        }
        self.shell.set_contact_email(next.contact_email.clone());
        self.settings = next;

        self.profile.notice = Some(match save_settings(&self.settings) {
            Ok(()) => "Settings saved.".to_string(),
            Err(e) => {
                error!("Saving settings failed: {:#}", e);
                format!("Could not save settings: {e}")
            }
        });
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for SportSyncApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_zoom_factor(self.settings.ui_scale);

        self.drain_responses();
        if self.chat.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }

        let mut actions: Vec<ShellAction> = Vec::new();

        header::draw_header(ctx, &self.shell, &self.theme, &mut actions);
        header::draw_footer(ctx, &self.theme, &mut actions);

        if let Some(text) = self.notice.clone() {
            egui::TopBottomPanel::bottom("notice").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(text).color(self.theme.muted));
                    right_aligned(ui, |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.notice = None;
                        }
                    });
                });
            });
        }

        let mut profile_request = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.surface))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(self.shell.view().label())
                    .show(ui, |ui| {
                        ui.add_space(16.0);
                        match self.shell.view() {
                            View::Home => home::draw_home(ui, &self.shell, &self.theme, &mut actions),
                            View::Booking => booking::draw_booking(
                                ui,
                                &self.shell,
                                &self.theme,
                                &mut actions,
                                &mut self.notice,
                            ),
                            View::Community => community::draw_community(ui, &self.theme),
                            View::About => about::draw_about(ui, &self.theme),
                            View::Profile => {
                                profile_request = profile::draw_profile(
                                    ui,
                                    &self.shell,
                                    &self.theme,
                                    &mut self.profile,
                                );
                            }
                        }
                        ui.add_space(32.0);
                    });
            });

        match chat_widget::draw_chat(ctx, &self.chat, &mut self.chat_ui, &self.theme) {
            Some(chat_widget::ChatIntent::Send) => self.send_chat(),
            Some(chat_widget::ChatIntent::StopWaiting) => self.chat.abandon(),
            None => {}
        }

        match profile_request {
            Some(profile::ProfileRequest::Save) => self.apply_settings(),
            Some(profile::ProfileRequest::TestConnection) => {
                self.profile.connection_status = Some("Testing…".into());
                self.send_command(EngineCommand::TestConnection);
            }
            None => {}
        }

        for action in actions {
            self.shell.dispatch(action);
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn bubble(ui: &mut egui::Ui, fill: egui::Color32, text_color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_max_width(260.0);
            ui.label(RichText::new(text).color(text_color));
        });
}

pub fn card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(16))
        .show(ui, add_contents)
}

pub fn section_heading(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).size(28.0).strong().color(theme.text));
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).color(theme.muted));
    }
    ui.add_space(12.0);
}

pub fn primary_button(ui: &mut egui::Ui, theme: &Theme, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).strong().color(egui::Color32::WHITE))
            .fill(theme.primary)
            .corner_radius(egui::CornerRadius::same(10))
            .min_size(egui::vec2(140.0, 36.0)),
    )
}

pub fn right_aligned(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.with_layout(Layout::right_to_left(egui::Align::TOP), add_contents);
}
