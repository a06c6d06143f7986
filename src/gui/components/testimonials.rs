// src/gui/components/testimonials.rs
use eframe::egui::{self, RichText, Vec2};

use super::card::thumbnail;
use crate::{content, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.vertical_centered(|ui| ui.heading(content::TESTIMONIALS_HEADING));
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for t in content::TESTIMONIALS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(300.0);
                ui.horizontal(|ui| {
                    thumbnail(ui, &app.options, t.avatar, Vec2::splat(48.0), t.name);
                    ui.label(RichText::new(t.name).size(16.0).strong());
                });
                ui.label(RichText::new(t.text).italics());
            });
        }
    });
}
