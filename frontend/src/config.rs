use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../site.json");

/// Tunables for the page. Every field has a default so a partial `site.json`
/// still loads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub narrow_breakpoint_px: u32,
    pub products_visible_desktop: usize,
    pub products_visible_mobile: usize,
    pub testimonial_interval_ms: u32,
    pub reveal_threshold: f64,
    pub header_scrolled_offset_px: f64,
    /// Fraction of the page scroll the hero background trails by.
    pub hero_parallax_factor: f64,
    pub image_cdn_base: String,
    pub contact_email: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768,
            products_visible_desktop: 3,
            products_visible_mobile: 1,
            testimonial_interval_ms: 8000,
            reveal_threshold: 0.3,
            header_scrolled_offset_px: 50.0,
            hero_parallax_factor: 0.2,
            image_cdn_base: "https://images.unsplash.com".to_string(),
            contact_email: "info@shi-arms.co.il".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: SiteConfig = serde_json::from_str(raw)?;
        config.reveal_threshold = config.reveal_threshold.clamp(0.0, 1.0);
        config.hero_parallax_factor = config.hero_parallax_factor.clamp(0.0, 1.0);
        config.products_visible_desktop = config.products_visible_desktop.max(1);
        config.products_visible_mobile = config.products_visible_mobile.max(1);
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Full URL for a photo id hosted on the image CDN.
    pub fn image_url(&self, photo: &str, width: u32) -> String {
        format!(
            "{}/{}?auto=format&fit=crop&w={}&q=80",
            self.image_cdn_base.trim_end_matches('/'),
            photo,
            width
        )
    }
}

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("site.json is malformed, using defaults: {}", e);
        SiteConfig::default()
    }
});

pub fn get() -> &'static SiteConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_matches_defaults() {
        let parsed = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn missing_fields_fall_back() {
        let parsed = SiteConfig::from_json(r#"{ "testimonial_interval_ms": 5000 }"#).unwrap();
        assert_eq!(parsed.testimonial_interval_ms, 5000);
        assert_eq!(parsed.narrow_breakpoint_px, 768);
        assert_eq!(parsed.products_visible_desktop, 3);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let parsed = SiteConfig::from_json(
            r#"{ "reveal_threshold": 1.7, "products_visible_mobile": 0, "hero_parallax_factor": -0.5 }"#,
        )
        .unwrap();
        assert_eq!(parsed.reveal_threshold, 1.0);
        assert_eq!(parsed.hero_parallax_factor, 0.0);
        assert_eq!(parsed.products_visible_mobile, 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let config = SiteConfig {
            log_level: "chatty".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
        let config = SiteConfig {
            log_level: "debug".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn image_url_joins_without_double_slash() {
        let config = SiteConfig {
            image_cdn_base: "https://cdn.example/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.image_url("photo-1", 600),
            "https://cdn.example/photo-1?auto=format&fit=crop&w=600&q=80"
        );
    }
}
