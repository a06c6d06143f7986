// src/config/consts.rs

// Catalog cache (written by the scraper, relative to the working directory)
pub const DEFAULT_CATALOG_PATH: &str = "../scraper/cache.json";
pub const CATALOG_PATH_ENV: &str = "CATALOG_PATH";

// Affiliate links
pub const AFFILIATE_PLACEHOLDER: &str = "TUAFILIADO";
pub const AFFILIATE_ID_ENV: &str = "AFFILIATE_ID";

// Catalog grid
pub const ITEMS_PER_PAGE: usize = 12;
pub const PRICE_CEILINGS: [u32; 4] = [20, 50, 100, 200];

// Marketing sections
pub const FEATURED_COUNT: usize = 2;
pub const POPULAR_COUNT: usize = 5;
pub const PRODUCT_DEAL_BELOW: f64 = 50.0;
pub const COURSE_DEAL_BELOW: f64 = 20.0;

// Window
pub const APP_TITLE: &str = "Comparador de Precios";
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 860.0;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
