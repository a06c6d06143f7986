// src/gui/components/hero.rs
use eframe::egui::{self, RichText};

use super::card::BADGE_INDIGO;
use crate::{content, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(content::HERO_TITLE).size(30.0).strong().color(BADGE_INDIGO));
        ui.add_space(6.0);
        ui.label(RichText::new(content::HERO_SUBTITLE).size(16.0));
        ui.add_space(12.0);

        let cta = egui::Button::new(RichText::new(content::HERO_CTA).size(18.0).strong())
            .fill(BADGE_INDIGO)
            .min_size(egui::vec2(220.0, 40.0));
        if ui.add(cta).clicked() {
            logd!("UI: Hero CTA");
            app.request_list_scroll();
        }

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for badge in content::TRUST_BADGES {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(badge).strong());
                });
            }
        });
    });
}
