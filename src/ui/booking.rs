use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use eframe::egui;
use egui::RichText;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::shell::{Shell, ShellAction, View};
use crate::engine::wizard::{DetailTab, WizardAction, WizardState, WizardStep};
use crate::model::booking::{days_in_month, BookingRecord, PaymentMethod, TimeSlot};
use crate::model::catalog::GALLERY_THUMBNAILS;
use crate::model::court::Court;
use crate::ui::app::{card, primary_button, right_aligned, section_heading, Theme};

pub fn draw_booking(
    ui: &mut egui::Ui,
    shell: &Shell,
    theme: &Theme,
    actions: &mut Vec<ShellAction>,
    notice: &mut Option<String>,
) {
    let wizard = shell.wizard();
    let Some(court) = wizard.court() else {
        return;
    };

    if wizard.step() == WizardStep::Details {
        draw_details(ui, court, wizard, theme, actions);
        return;
    }

    let mut act = |a: WizardAction| actions.push(ShellAction::Wizard(a));

    match wizard.step() {
        WizardStep::Calendar => draw_calendar(ui, wizard, shell.today(), theme, &mut act),
        WizardStep::Payment => draw_payment(ui, theme, &mut act),
        WizardStep::Success => draw_success(ui, court, wizard.booking(), theme, &mut act),
        WizardStep::Confirmation => {
            draw_confirmation(ui, wizard.booking(), theme, &mut act, notice)
        }
        WizardStep::Details => {}
    }
}

/* =========================
   Details
   ========================= */

fn draw_details(
    ui: &mut egui::Ui,
    court: &'static Court,
    wizard: &WizardState,
    theme: &Theme,
    actions: &mut Vec<ShellAction>,
) {
    if ui.button("← Back to Listing").clicked() {
        actions.push(ShellAction::Navigate(View::Home));
    }
    ui.add_space(8.0);

    card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(court.sport.label()).small().color(theme.accent));
                    ui.label(RichText::new(format!("★ {}", court.rating)).color(theme.text));
                });
                ui.label(RichText::new(court.name).size(30.0).strong().color(theme.text));
                ui.label(RichText::new(format!("📍 {}", court.location)).color(theme.muted));
                ui.label(RichText::new(court.description).color(theme.muted));
            });

            right_aligned(ui, |ui| {
                if primary_button(ui, theme, "Book Now").clicked() {
                    actions.push(ShellAction::Wizard(WizardAction::BookNow));
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new("Starting from").small().color(theme.muted));
                    ui.label(RichText::new(format!("${}/hr", court.price)).size(26.0).strong());
                });
            });
        });
    });

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let mut tab = wizard.detail_tab();
        for choice in DetailTab::ALL {
            ui.selectable_value(&mut tab, choice, choice.label());
        }
        if tab != wizard.detail_tab() {
            actions.push(ShellAction::Wizard(WizardAction::SelectDetailTab(tab)));
        }
    });
    ui.separator();

    match wizard.detail_tab() {
        DetailTab::Photos => draw_gallery(ui, court),
        DetailTab::Map => draw_map(ui, court, theme),
        DetailTab::Pricing => draw_pricing(ui, court, theme),
        DetailTab::Availability => draw_availability(ui, wizard.availability_seed(), theme),
    }
}

fn draw_gallery(ui: &mut egui::Ui, court: &Court) {
    let width = ui.available_width();
    ui.horizontal_top(|ui| {
        ui.add(
            egui::Image::new(court.image)
                .fit_to_exact_size(egui::vec2(width * 0.6, 320.0))
                .corner_radius(egui::CornerRadius::same(16)),
        );
        ui.vertical(|ui| {
            for thumb in GALLERY_THUMBNAILS {
                ui.add(
                    egui::Image::new(*thumb)
                        .fit_to_exact_size(egui::vec2(width * 0.3, 96.0))
                        .corner_radius(egui::CornerRadius::same(12)),
                );
            }
            ui.label(RichText::new("+12").strong());
        });
    });
}

fn draw_map(ui: &mut egui::Ui, court: &Court, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 280.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(16), theme.border);
    painter.circle_filled(rect.center(), 10.0, theme.primary);
    painter.text(
        rect.center() + egui::vec2(0.0, 28.0),
        egui::Align2::CENTER_TOP,
        "Interactive Map View",
        egui::FontId::proportional(16.0),
        theme.muted,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 52.0),
        egui::Align2::CENTER_TOP,
        format!("{:.4}, {:.4}", court.coordinates.lat, court.coordinates.lng),
        egui::FontId::monospace(13.0),
        theme.muted,
    );
}

fn draw_pricing(ui: &mut egui::Ui, court: &Court, theme: &Theme) {
    ui.label(RichText::new("Membership Rates").size(20.0).strong());
    ui.add_space(8.0);
    ui.horizontal_top(|ui| {
        for tier in court.pricing_tiers() {
            card(ui, theme, |ui| {
                ui.set_min_width(180.0);
                ui.label(RichText::new(tier.name).small().color(theme.muted));
                ui.label(RichText::new(format!("${}/hr", tier.price)).size(24.0).strong());
                ui.label(RichText::new(tier.description).color(theme.muted));
            });
        }
    });
}

/// Decorative per-day occupancy; stable for one court selection.
fn draw_availability(ui: &mut egui::Ui, seed: u64, theme: &Theme) {
    let mut rng = StdRng::seed_from_u64(seed);

    egui::Grid::new("availability_grid")
        .num_columns(7)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
                ui.label(RichText::new(day).small().strong().color(theme.muted));
            }
            ui.end_row();

            for i in 0..31 {
                ui.vertical(|ui| {
                    ui.label(format!("{}", i + 1));
                    ui.add(egui::ProgressBar::new(rng.gen::<f32>()).desired_width(64.0));
                });
                if i % 7 == 6 {
                    ui.end_row();
                }
            }
        });
}

/* =========================
   Calendar
   ========================= */

fn draw_calendar(
    ui: &mut egui::Ui,
    wizard: &WizardState,
    today: NaiveDate,
    theme: &Theme,
    act: &mut impl FnMut(WizardAction),
) {
    section_heading(
        ui,
        theme,
        "Google Calendar Integration",
        "Pick your preferred date and time slot synced with our live calendar.",
    );

    let selection = wizard.selection();

    ui.horizontal_top(|ui| {
        card(ui, theme, |ui| {
            ui.label(RichText::new("Select Date").strong());
            ui.label(RichText::new(today.format("%B %Y").to_string()).color(theme.muted));
            ui.add_space(6.0);

            let Some(first) = today.with_day(1) else {
                return;
            };
            let lead = first.weekday().num_days_from_sunday();

            egui::Grid::new("calendar_grid").num_columns(7).show(ui, |ui| {
                for d in ["S", "M", "T", "W", "T", "F", "S"] {
                    ui.label(RichText::new(d).small().color(theme.muted));
                }
                ui.end_row();

                for _ in 0..lead {
                    ui.label("");
                }
                for day in 1..=days_in_month(today) {
                    let Some(date) = today.with_day(day) else {
                        continue;
                    };
                    let selected = selection.map(|s| s.date) == Some(date);
                    if ui.selectable_label(selected, format!("{day:>2}")).clicked() {
                        act(WizardAction::PickDate(date));
                    }
                    if date.weekday() == Weekday::Sat {
                        ui.end_row();
                    }
                }
            });
        });

        card(ui, theme, |ui| {
            ui.label(RichText::new("Available Slots").strong());
            ui.add_space(6.0);
            for slot in TimeSlot::ALL {
                let selected = selection.map(|s| s.slot) == Some(slot);
                if ui.selectable_label(selected, slot.label()).clicked() {
                    act(WizardAction::PickSlot(slot));
                }
            }
        });
    });

    ui.add_space(16.0);
    if let Some(sel) = selection {
        ui.label(RichText::new(sel.display()).color(theme.muted));
    }
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            act(WizardAction::Cancel);
        }
        if primary_button(ui, theme, "Continue to Payment").clicked() {
            act(WizardAction::ContinueToPayment);
        }
    });
}

/* =========================
   Payment
   ========================= */

fn draw_payment(ui: &mut egui::Ui, theme: &Theme, act: &mut impl FnMut(WizardAction)) {
    section_heading(
        ui,
        theme,
        "Secure Payment",
        "Choose your preferred way to secure this court.",
    );

    ui.horizontal_top(|ui| {
        for method in [PaymentMethod::QrSecurePay, PaymentMethod::PhoneBooking] {
            let clicked = card(ui, theme, |ui| {
                ui.set_width(280.0);
                ui.label(RichText::new(method.label()).size(18.0).strong());
                ui.label(RichText::new(method.blurb()).color(theme.muted));
            })
            .response
            .interact(egui::Sense::click())
            .clicked();

            if clicked {
                act(WizardAction::ChoosePayment(method));
            }
        }
    });

    ui.add_space(12.0);
    if ui.button("Go Back").clicked() {
        act(WizardAction::GoBack);
    }
}

/* =========================
   Success / Confirmation
   ========================= */

fn draw_success(
    ui: &mut egui::Ui,
    court: &Court,
    booking: Option<&BookingRecord>,
    theme: &Theme,
    act: &mut impl FnMut(WizardAction),
) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("✔").size(48.0).color(theme.primary));
        ui.label(RichText::new("Success!").size(32.0).strong());
        ui.label(
            RichText::new(format!(
                "Your booking at {} has been processed successfully.",
                court.name
            ))
            .color(theme.muted),
        );
        ui.add_space(12.0);

        if let Some(record) = booking {
            card(ui, theme, |ui| {
                egui::Grid::new("success_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Order ID");
                    ui.label(RichText::new(&record.order_id).monospace().strong());
                    ui.end_row();
                    ui.label("Status");
                    ui.label(RichText::new("Confirmed").strong());
                    ui.end_row();
                });
            });
        }

        ui.add_space(12.0);
        if primary_button(ui, theme, "View Confirmation").clicked() {
            act(WizardAction::ViewConfirmation);
        }
    });
}

fn draw_confirmation(
    ui: &mut egui::Ui,
    booking: Option<&BookingRecord>,
    theme: &Theme,
    act: &mut impl FnMut(WizardAction),
    notice: &mut Option<String>,
) {
    ui.vertical_centered(|ui| {
        crate::ui::header::logo(ui, theme);
        ui.add_space(12.0);

        if let Some(record) = booking {
            ui.label(RichText::new("Confirmation Number").small().color(theme.muted));
            ui.label(
                RichText::new(&record.confirmation_number)
                    .size(28.0)
                    .monospace()
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(RichText::new("Email Confirmation").strong());
            ui.label(
                RichText::new(format!(
                    "A copy of this receipt has been sent to {}",
                    record.contact_email
                ))
                .color(theme.muted),
            );
            ui.add_space(12.0);

            card(ui, theme, |ui| {
                egui::Grid::new("receipt_grid").num_columns(2).spacing(egui::vec2(24.0, 8.0)).show(ui, |ui| {
                    let rows = [
                        ("Venue", record.court_name.to_string()),
                        ("Date & Time", record.selection.display()),
                        ("Amount Paid", record.amount_label()),
                        ("Payment", record.payment.label().to_string()),
                        ("Access Code", record.access_code.clone()),
                    ];
                    for (label, value) in rows {
                        ui.label(RichText::new(label).small().color(theme.muted));
                        ui.label(RichText::new(value).strong());
                        ui.end_row();
                    }
                });
            });

            ui.add_space(12.0);
            if ui.button("🖨 Save Receipt").clicked() {
                *notice = Some(match save_receipt(record) {
                    Ok(Some(path)) => format!("Receipt saved to {}", path.display()),
                    Ok(None) => "Receipt not saved.".to_string(),
                    Err(e) => {
                        error!("Saving receipt failed: {:#}", e);
                        format!("Could not save receipt: {e}")
                    }
                });
            }
        }

        if primary_button(ui, theme, "Back to Home").clicked() {
            act(WizardAction::BackToHome);
        }
    });
}

/// Asks where to write the receipt. `Ok(None)` when the dialog is dismissed.
fn save_receipt(record: &BookingRecord) -> Result<Option<PathBuf>> {
    let file_name = format!("{}.txt", record.confirmation_number);
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(file_name.as_str())
        .add_filter("Text", &["txt"])
        .save_file()
    else {
        return Ok(None);
    };

    fs::write(&path, record.receipt_text())
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Receipt {} written to {}", record.confirmation_number, path.display());
    Ok(Some(path))
}
