// src/gui/components/filters.rs
//
// Platform / price ceiling / sort selectors. Changes go through
// `Shell::set_filters`, which leaves the current page alone.

use eframe::egui;

use crate::{
    catalog::ItemKind,
    config::consts::PRICE_CEILINGS,
    filter::{PlatformFilter, PriceRange, SortMode},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let tab = app.shell.active_tab();
    let mut filters = *app.shell.filters();

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("platform_filter")
            .selected_text(filters.platform.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.platform, PlatformFilter::All, PlatformFilter::All.label());
                for &kind in ItemKind::options_for(tab) {
                    let opt = PlatformFilter::Only(kind);
                    ui.selectable_value(&mut filters.platform, opt, opt.label());
                }
            });

        egui::ComboBox::from_id_salt("price_filter")
            .selected_text(filters.price_range.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.price_range, PriceRange::Any, PriceRange::Any.label());
                for ceiling in PRICE_CEILINGS {
                    let opt = PriceRange::UpTo(f64::from(ceiling));
                    ui.selectable_value(&mut filters.price_range, opt, opt.label());
                }
            });

        egui::ComboBox::from_id_salt("sort_mode")
            .selected_text(filters.sort.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut filters.sort, mode, mode.label());
                }
            });
    });

    app.shell.set_filters(filters);
}
