use egui::Color32;
use serde::{Deserialize, Serialize};

/// Host-facing canvas settings. These persist across restarts through the
/// eframe storage; new fields pick up defaults when older state is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Logical canvas resolution, independent of the displayed size.
    pub width: f32,
    pub height: f32,
    /// Background colour as an RGB triple.
    pub background: [u8; 3],
    /// Linear factor mapping brush size tiers to pixel sizes.
    pub scale_factor: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            background: [255, 255, 255],
            scale_factor: 10.0,
        }
    }
}

impl CanvasConfig {
    pub fn background_colour(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
