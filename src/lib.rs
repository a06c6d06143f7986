// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod affiliate;
pub mod catalog;
pub mod content;
pub mod csv;
pub mod filter;
pub mod images;
pub mod paginate;
pub mod sections;
pub mod shell;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
