//! Site config loading.
//!
//! Reads the optional `<script type="application/json" id="site-config">`
//! block. A missing block means defaults; an invalid one is reported on the
//! console and also falls back to defaults.

use crate::dom;
use pf_ui_core::SiteConfig;

const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Some(block) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            gloo_console::warn!(format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
            SiteConfig::default()
        }
    }
}
