//! Layout, viewer and window configuration
//!
//! Defaults reproduce the classic UML Visualizer window: 10px box padding,
//! 40px child spacing, 50px root gap, a 16ms tick with 0.1 smoothing, and a
//! fixed 960x540 client area.

use std::time::Duration;

use super::{Rgba, UmlError};

/// Box and spacing parameters used by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Inner box padding
    pub padding: i32,
    /// Gap unit between expanded children
    pub child_spacing: i32,
    /// Horizontal gap between side-by-side roots
    pub root_gap: i32,
    /// Stroke a thin outline around every box
    pub outline: bool,
    /// Connect an expanded root to its children with lines
    pub connectors: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 10,
            child_spacing: 40,
            root_gap: 50,
            outline: true,
            connectors: true,
        }
    }
}

/// Window parameters handed to whichever front end hosts the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub centered: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "UML Visualizer".to_string(),
            width: 960,
            height: 540,
            resizable: false,
            centered: true,
        }
    }
}

/// Interaction and animation parameters for the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub tick: Duration,
    /// Fraction of the remaining pan distance covered per tick
    pub smoothing: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per wheel notch
    pub zoom_step: f64,
    /// Dimming wash drawn behind a selected hierarchy
    pub wash: Rgba,
    pub layout: LayoutConfig,
    pub window: WindowConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(16),
            smoothing: 0.1,
            min_zoom: 0.5,
            max_zoom: 2.0,
            zoom_step: 0.1,
            wash: Rgba::rgba(0, 0, 0, 0x40),
            layout: LayoutConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Check that the parameters describe a usable viewer
    pub fn validate(&self) -> Result<(), UmlError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(UmlError::config_error(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if self.min_zoom <= 0.0 || self.max_zoom <= 0.0 {
            return Err(UmlError::config_error("zoom bounds must be positive"));
        }
        if self.min_zoom > self.max_zoom {
            return Err(UmlError::config_error(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.tick.is_zero() {
            return Err(UmlError::config_error("tick period must be non-zero"));
        }
        if self.layout.padding < 0 || self.layout.child_spacing < 0 || self.layout.root_gap < 0 {
            return Err(UmlError::config_error("layout spacing must be non-negative"));
        }
        Ok(())
    }

    /// Clamp a zoom factor into the configured bounds
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
