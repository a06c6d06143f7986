// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use comparador::{
    config::{
        consts::{APP_TITLE, WINDOW_H, WINDOW_W},
        options::AppOptions,
    },
    gui, log,
};
use eframe::egui::{IconData, ViewportBuilder};

/// Indigo→blue diagonal gradient with a white price-tag dot.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (cx, cy) = (x as i32 - 44, y as i32 - 20);
        if cx * cx + cy * cy <= 36 {
            return image::Rgba([255, 255, 255, 255]);
        }
        let t = (x + y) as f32 / (2 * (SIZE - 1)) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        image::Rgba([lerp(0x43, 0x3B), lerp(0x38, 0x82), lerp(0xCA, 0xF6), 255])
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
