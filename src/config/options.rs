// src/config/options.rs
use std::env;
use std::path::PathBuf;

use super::consts::*;
use crate::affiliate::AffiliateLinker;
use crate::images::ImagePolicy;

/// Runtime settings shared by the GUI and the CLI.
#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub catalog_path: PathBuf,
    pub affiliate: AffiliateLinker,
    pub images: ImagePolicy,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            affiliate: AffiliateLinker::default(),
            images: ImagePolicy::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, overridden by `CATALOG_PATH` / `AFFILIATE_ID` when set and non-empty.
    pub fn from_env() -> Self {
        let mut opts = Self::default();

        if let Some(path) = non_empty_var(CATALOG_PATH_ENV) {
            opts.catalog_path = PathBuf::from(path);
        }
        if let Some(id) = non_empty_var(AFFILIATE_ID_ENV) {
            opts.affiliate = AffiliateLinker::new(id);
        }
        opts
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
