// src/affiliate.rs
use std::borrow::Cow;

use crate::config::consts::AFFILIATE_PLACEHOLDER;

/// Fills the affiliate id into stored link templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffiliateLinker {
    id: String,
}

impl Default for AffiliateLinker {
    /// No id configured: the placeholder is written back unchanged.
    fn default() -> Self {
        Self { id: s!(AFFILIATE_PLACEHOLDER) }
    }
}

impl AffiliateLinker {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn is_configured(&self) -> bool { self.id != AFFILIATE_PLACEHOLDER }

    /// Replace the first placeholder in `template`. Borrowed when there is
    /// nothing to replace.
    pub fn link<'a>(&self, template: &'a str) -> Cow<'a, str> {
        if template.contains(AFFILIATE_PLACEHOLDER) {
            Cow::Owned(template.replacen(AFFILIATE_PLACEHOLDER, &self.id, 1))
        } else {
            Cow::Borrowed(template)
        }
    }
}
