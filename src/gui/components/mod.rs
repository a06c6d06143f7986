// src/gui/components/mod.rs
//
// One `draw` per storefront section, top to bottom. Sections read from `App`
// and only touch the shell through its transitions.

pub mod card;
pub mod categories;
pub mod featured;
pub mod filters;
pub mod grid;
pub mod hero;
pub mod nav_bar;
pub mod pager;
pub mod popular;
pub mod tabs;
pub mod testimonials;
