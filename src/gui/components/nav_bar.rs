// src/gui/components/nav_bar.rs
use eframe::egui::{self, Align, Layout, RichText};

use super::card::BADGE_INDIGO;
use crate::{content, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let (left, right) = content::BRAND;
        ui.label(RichText::new(left).size(22.0).strong().color(BADGE_INDIGO));
        ui.label(RichText::new(right).size(22.0).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.search_text)
                    .hint_text(content::SEARCH_HINT)
                    .desired_width(240.0),
            );
            if resp.changed() {
                app.shell.set_search(&app.search_text);
            }
        });
    });
}
