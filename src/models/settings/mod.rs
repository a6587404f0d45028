// Settings module
// Tunables for the preview grid, the live clock and the waitlist endpoint

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::time_geometry::{TimeScale, DEFAULT_HOUR_HEIGHT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub hour_height: f32,
    pub time_column_width: f32,
    pub header_height: f32,
    pub month_label_height: f32,
    pub all_day_height: f32,
    /// Hours visible in the scroll viewport
    pub visible_hours: f32,
    /// Hours of context kept above the current hour on first scroll
    pub scroll_lead_hours: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            hour_height: DEFAULT_HOUR_HEIGHT,
            time_column_width: 64.0,
            header_height: 34.0,
            month_label_height: 36.0,
            all_day_height: 28.0,
            visible_hours: 10.0,
            scroll_lead_hours: 2,
        }
    }
}

impl GridSettings {
    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.hour_height)
    }

    pub fn viewport_height(&self) -> f32 {
        self.visible_hours * self.hour_height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    pub tick_interval_secs: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            tick_interval_secs: 60,
        }
    }
}

impl ClockSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistSettings {
    pub endpoint: String,
    pub form_id: String,
    pub timeout_secs: u64,
}

impl Default for WaitlistSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://app.loops.so/api/newsletter-form".to_string(),
            form_id: "cmlguyrpz1nzg0i20h931rewc".to_string(),
            timeout_secs: 20,
        }
    }
}

impl WaitlistSettings {
    pub fn form_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.form_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub grid: GridSettings,
    pub clock: ClockSettings,
    pub waitlist: WaitlistSettings,
}

impl PreviewSettings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        let grid = &self.grid;
        let lengths = [
            ("hour_height", grid.hour_height),
            ("time_column_width", grid.time_column_width),
            ("header_height", grid.header_height),
            ("month_label_height", grid.month_label_height),
            ("all_day_height", grid.all_day_height),
            ("visible_hours", grid.visible_hours),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("grid.{} must be positive, got {}", name, value));
            }
        }

        if grid.visible_hours > 24.0 {
            return Err("grid.visible_hours cannot exceed 24".to_string());
        }

        if self.clock.tick_interval_secs == 0 {
            return Err("clock.tick_interval_secs must be at least 1".to_string());
        }

        if self.waitlist.timeout_secs == 0 {
            return Err("waitlist.timeout_secs must be at least 1".to_string());
        }

        if !self.waitlist.endpoint.starts_with("https://") {
            return Err("waitlist.endpoint must use HTTPS".to_string());
        }

        if self.waitlist.form_id.trim().is_empty() {
            return Err("waitlist.form_id cannot be empty".to_string());
        }

        Ok(())
    }
}
