//! Page configuration. Defaults reproduce the shipped page; with the `serde_json`
//! feature a JSON object can override any subset of fields.

use crate::geometry::Size;

/// Which evasion behaviour drives the "No" button. Only one is active per page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PolicyKind {
    /// Jump to one of four compass points around the card center.
    Radial,
    /// Recenter and slide behind the cover image.
    HideInPlace,
    /// Jump anywhere in the viewport, away from the pointer.
    #[default]
    CursorAvoiding,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvasionConfig {
    pub policy: PolicyKind,

    // Radial
    pub radial_distance: f64,
    pub radial_jitter: f64,
    /// The cover image sits a little below the card's geometric center.
    pub center_offset_y: f64,

    // Cursor avoiding
    pub jump_min: f64,
    pub jump_max: f64,
    pub edge_margin: f64,
    pub repulsion_radius: f64,
    pub fallback_element_width: f64,
    pub fallback_element_height: f64,

    pub marker_width: f64,
    pub marker_height: f64,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            radial_distance: 240.0,
            radial_jitter: 20.0,
            center_offset_y: 20.0,
            jump_min: 100.0,
            jump_max: 200.0,
            edge_margin: 10.0,
            repulsion_radius: 150.0,
            fallback_element_width: 120.0,
            fallback_element_height: 60.0,
            marker_width: 120.0,
            marker_height: 120.0,
        }
    }
}

impl EvasionConfig {
    pub fn fallback_element_size(&self) -> Size {
        Size::new(self.fallback_element_width, self.fallback_element_height)
    }

    pub fn marker_size(&self) -> Size {
        Size::new(self.marker_width, self.marker_height)
    }

    /// Repair nonsensical overrides (inverted jump range, negative sizes).
    fn normalized(mut self) -> Self {
        if self.jump_max < self.jump_min {
            std::mem::swap(&mut self.jump_min, &mut self.jump_max);
        }
        self.edge_margin = self.edge_margin.max(0.0);
        self.repulsion_radius = self.repulsion_radius.max(0.0);
        self.marker_width = self.marker_width.max(0.0);
        self.marker_height = self.marker_height.max(0.0);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    pub question: String,
    pub yes_label: String,
    pub no_label: String,
    pub accepted_message: String,
    pub accepted_caption: String,
    pub marker_caption: String,
    pub cover_image: String,
    pub marker_image: String,
    pub bubble_count: usize,
    pub heart_count: usize,
    /// `log` level name: "error", "warn", "info", "debug" or "trace".
    pub log_level: String,
    pub evasion: EvasionConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            question: "Will you go on a date with me?".to_string(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            accepted_message: "Yay! I knew it! ❤️".to_string(),
            accepted_caption: "See you soon 💖".to_string(),
            marker_caption: "Wrong button 🔪".to_string(),
            cover_image: "image1.jpeg".to_string(),
            marker_image: "image2.png".to_string(),
            bubble_count: 20,
            heart_count: 15,
            log_level: "info".to_string(),
            evasion: EvasionConfig::default(),
        }
    }
}

impl PageConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let cfg: PageConfig = serde_json::from_str(json)?;
        Ok(cfg.normalized())
    }

    pub fn normalized(mut self) -> Self {
        self.evasion = self.evasion.normalized();
        self
    }

    /// Unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
