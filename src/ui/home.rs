use eframe::egui;
use egui::RichText;

use crate::engine::filter::CategoryFilter;
use crate::engine::shell::{Shell, ShellAction};
use crate::model::court::{Court, SportType};
use crate::ui::app::{card, primary_button, section_heading, Theme};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1546519638-68e109498ffc?q=80&w=2090&auto=format&fit=crop";

const CARD_WIDTH: f32 = 300.0;

pub fn draw_home(ui: &mut egui::Ui, shell: &Shell, theme: &Theme, actions: &mut Vec<ShellAction>) {
    let browse_id = egui::Id::new("scroll_to_browse");
    let scroll_to_browse = ui.data(|d| d.get_temp::<bool>(browse_id).unwrap_or(false));

    draw_hero(ui, shell, theme, actions);
    ui.add_space(24.0);
    draw_categories(ui, theme, actions);
    ui.add_space(32.0);

    let browse = ui.label("");
    if scroll_to_browse {
        browse.scroll_to_me(Some(egui::Align::TOP));
        ui.data_mut(|d| d.insert_temp(browse_id, false));
    }
    draw_listing(ui, shell, theme, actions);
}

fn request_scroll_to_browse(ui: &egui::Ui) {
    ui.data_mut(|d| d.insert_temp(egui::Id::new("scroll_to_browse"), true));
}

fn draw_hero(ui: &mut egui::Ui, shell: &Shell, theme: &Theme, actions: &mut Vec<ShellAction>) {
    let width = ui.available_width();
    ui.add(
        egui::Image::new(HERO_IMAGE)
            .fit_to_exact_size(egui::vec2(width, 220.0))
            .corner_radius(egui::CornerRadius::same(24)),
    );

    ui.add_space(12.0);
    ui.label(RichText::new("Find your Arena.").size(40.0).strong().color(theme.text));
    ui.label(
        RichText::new("Book premium Badminton, Pickleball, and Basketball courts in a few clicks.")
            .size(16.0)
            .color(theme.muted),
    );

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let mut query = shell.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search locations...")
                .desired_width(360.0),
        );
        if response.changed() {
            actions.push(ShellAction::SetQuery(query));
        }

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if primary_button(ui, theme, "Search").clicked() || submitted {
            request_scroll_to_browse(ui);
        }
    });
}

fn draw_categories(ui: &mut egui::Ui, theme: &Theme, actions: &mut Vec<ShellAction>) {
    ui.horizontal(|ui| {
        for sport in SportType::ALL {
            let clicked = card(ui, theme, |ui| {
                ui.set_min_width(180.0);
                ui.label(RichText::new(sport.label()).size(18.0).strong().color(theme.text));
                ui.label(RichText::new("Instant Booking").small().color(theme.muted));
            })
            .response
            .interact(egui::Sense::click())
            .clicked();

            if clicked {
                actions.push(ShellAction::SetCategory(CategoryFilter::Only(sport)));
                request_scroll_to_browse(ui);
            }
        }
    });
}

fn draw_listing(ui: &mut egui::Ui, shell: &Shell, theme: &Theme, actions: &mut Vec<ShellAction>) {
    section_heading(ui, theme, "Explore Facilities", "Premium courts for every skill level.");

    ui.horizontal(|ui| {
        let mut category = shell.category();
        for choice in CategoryFilter::CHOICES {
            ui.selectable_value(&mut category, choice, choice.label());
        }
        if category != shell.category() {
            actions.push(ShellAction::SetCategory(category));
        }
    });
    ui.add_space(12.0);

    let courts = shell.visible_courts();
    if courts.is_empty() {
        ui.label(RichText::new("No courts match your search.").color(theme.muted));
        return;
    }

    let per_row = ((ui.available_width() / (CARD_WIDTH + 16.0)).floor() as usize).max(1);
    for row in courts.chunks(per_row) {
        ui.horizontal_top(|ui| {
            for &court in row {
                if court_card(ui, court, theme) {
                    actions.push(ShellAction::SelectCourt(court));
                }
            }
        });
        ui.add_space(16.0);
    }
}

/// Returns true when "BOOK SLOT" was clicked.
fn court_card(ui: &mut egui::Ui, court: &'static Court, theme: &Theme) -> bool {
    let mut book = false;

    card(ui, theme, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.add(
            egui::Image::new(court.image)
                .fit_to_exact_size(egui::vec2(CARD_WIDTH, 180.0))
                .corner_radius(egui::CornerRadius::same(12)),
        );

        ui.horizontal(|ui| {
            ui.label(RichText::new(court.sport.label().to_uppercase()).small().color(theme.accent));
            ui.label(RichText::new("✔ Verified").small().color(theme.muted));
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new(court.name).size(18.0).strong().color(theme.text));
            ui.label(RichText::new(format!("★ {}", court.rating)).color(theme.text));
        });
        ui.label(RichText::new(format!("📍 {}", court.location)).color(theme.muted));

        ui.horizontal_wrapped(|ui| {
            for amenity in court.amenities.iter().take(3) {
                ui.label(RichText::new(*amenity).small().background_color(theme.surface));
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("${}", court.price)).size(22.0).strong());
            ui.label(RichText::new("/hr").color(theme.muted));
            crate::ui::app::right_aligned(ui, |ui| {
                if primary_button(ui, theme, "BOOK SLOT").clicked() {
                    book = true;
                }
            });
        });
    });

    book
}
