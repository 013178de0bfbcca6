use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PreviewError;

const RAW_CDN_CONFIG: &str = include_str!("../resources/cdn.json");

static CDN_CONFIG: Lazy<CdnConfig> = Lazy::new(|| {
    CdnConfig::from_json(RAW_CDN_CONFIG).expect("embedded CDN config must contain valid JSON")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VueCdn {
    pub version: String,
    pub runtime_dev: String,
    pub runtime_prod: String,
    pub server_renderer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindCdn {
    pub script: String,
    pub animate: String,
}

/// CDN locations of everything a preview page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnConfig {
    pub vue: VueCdn,
    pub tailwind: TailwindCdn,
    pub packages: BTreeMap<String, String>,
}

/// Browser import map; only the `imports` table is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportMap {
    pub imports: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl CdnConfig {
    /// The configuration compiled into the crate.
    pub fn embedded() -> &'static CdnConfig {
        &CDN_CONFIG
    }

    pub fn from_json(payload: &str) -> Result<Self, PreviewError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Script and stylesheet tags for the preview document's `<head>`.
    pub fn head_html(&self) -> String {
        format!(
            "<script src=\"{}\"></script>\n  <link href=\"{}\" rel=\"stylesheet\">",
            self.tailwind.script, self.tailwind.animate
        )
    }

    pub fn import_map(&self) -> ImportMap {
        ImportMap {
            imports: self.packages.clone(),
        }
    }

    pub fn runtime_url(&self, mode: RuntimeMode) -> &str {
        match mode {
            RuntimeMode::Development => &self.vue.runtime_dev,
            RuntimeMode::Production => &self.vue.runtime_prod,
        }
    }
}

/// Returns the embedded CDN configuration as a raw JSON string.
pub fn cdn_config_json() -> &'static str {
    RAW_CDN_CONFIG
}

pub fn generate_head_html() -> String {
    CdnConfig::embedded().head_html()
}

pub fn custom_import_map() -> ImportMap {
    CdnConfig::embedded().import_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUCIDE: &str =
        "https://cdn.jsdelivr.net/npm/lucide-vue-next@0.511.0/dist/cjs/lucide-vue-next.min.js";

    #[test]
    fn embedded_config_has_expected_urls() {
        let config = CdnConfig::embedded();
        assert_eq!(config.vue.version, "3.4.0");
        assert_eq!(
            config.vue.server_renderer,
            "https://cdn.jsdelivr.net/npm/@vue/server-renderer@3.4.0/dist/server-renderer.esm-browser.prod.js"
        );
        assert_eq!(
            config.tailwind.script,
            "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"
        );
        assert_eq!(config.packages.get("lucide-vue-next").map(String::as_str), Some(LUCIDE));
    }

    #[test]
    fn head_html_embeds_tailwind_assets() {
        assert_eq!(
            generate_head_html(),
            "<script src=\"https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4\"></script>\n  \
             <link href=\"https://cdn.jsdelivr.net/npm/tw-animate-css@1.3.0/dist/tw-animate.min.css\" rel=\"stylesheet\">"
        );
    }

    #[test]
    fn import_map_serializes_packages_under_imports() {
        let value = serde_json::to_value(custom_import_map()).unwrap();
        assert_eq!(value, serde_json::json!({ "imports": { "lucide-vue-next": LUCIDE } }));
    }

    #[test]
    fn runtime_url_follows_mode() {
        let config = CdnConfig::embedded();
        assert!(config
            .runtime_url(RuntimeMode::Development)
            .ends_with("/vue.esm-browser.js"));
        assert!(config
            .runtime_url(RuntimeMode::Production)
            .ends_with("/vue.esm-browser.prod.js"));
    }

    #[test]
    fn raw_json_round_trips_through_config() {
        let config = CdnConfig::from_json(cdn_config_json()).unwrap();
        assert_eq!(&config, CdnConfig::embedded());
        assert!(CdnConfig::from_json("{\"vue\": {}}").is_err());
    }
}
