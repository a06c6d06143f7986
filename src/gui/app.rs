// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    catalog::{self, CategoryPools, group_by_name},
    config::{consts::APP_TITLE, options::AppOptions},
    sections::Sections,
    shell::Shell,
};

use super::components;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(options)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // catalog list state + cached view (single writer: this App)
    pub shell: Shell,

    // built once from the cache; never filtered
    pub sections: Sections,

    // search box buffer, mirrored into the shell on edit
    pub search_text: String,

    // CTA / "Ver todos" ask the list section to scroll into view next frame
    pub scroll_to_list: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let items = catalog::load(&options.catalog_path);
        Self::from_items(options, items)
    }

    /// Build from an already loaded catalog.
    pub fn from_items(options: AppOptions, items: Vec<catalog::CatalogItem>) -> Self {
        let grouped = group_by_name(&items);
        let pools = CategoryPools::from_grouped(&grouped);
        let sections = Sections::build(&items, &pools);

        logf!(
            "Init: {} items, {} courses, {} products, affiliate id {}",
            items.len(),
            pools.courses().len(),
            pools.products().len(),
            if options.affiliate.is_configured() { "set" } else { "not set" }
        );

        Self {
            options,
            shell: Shell::new(pools),
            sections,
            search_text: s!(),
            scroll_to_list: false,
        }
    }

    /// Used by the hero CTA and the "Ver todos" links.
    pub fn request_list_scroll(&mut self) {
        self.scroll_to_list = true;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("storefront_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::hero::draw(ui, self);
                    ui.add_space(16.0);

                    components::featured::draw(ui, self);
                    ui.separator();

                    components::popular::draw(ui, self, crate::config::state::Tab::Products);
                    ui.separator();

                    components::popular::draw(ui, self, crate::config::state::Tab::Courses);
                    ui.separator();

                    components::categories::draw(ui);
                    ui.separator();

                    components::testimonials::draw(ui, self);
                    ui.separator();

                    components::tabs::draw(ui, self);
                    components::filters::draw(ui, self);
                    ui.add_space(8.0);
                    components::grid::draw(ui, self);
                    components::pager::draw(ui, self);
                    ui.add_space(24.0);
                });
        });
    }
}
