use serde::{Deserialize, Serialize};

use crate::engine::llm_client::LlmSettings;

pub const MIN_UI_SCALE: f32 = 0.75;
pub const MAX_UI_SCALE: f32 = 2.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    /// Where confirmation receipts say they were sent
    pub contact_email: String,

    pub llm: LlmSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            contact_email: "john.doe@athlete.com".into(),
            llm: LlmSettings::default(),
        }
    }
}

impl AppSettings {
    /// Clamp values a hand-edited file could push out of range.
    pub fn sanitized(mut self) -> Self {
        if !self.ui_scale.is_finite() {
            self.ui_scale = 1.0;
        }
        self.ui_scale = self.ui_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE);
        self.llm.temperature = self.llm.temperature.clamp(0.0, 2.0);
        if self.llm.timeout_secs == 0 {
            self.llm.timeout_secs = LlmSettings::default().timeout_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"ui_scale":1.5,"llm":{"model":"m"}}"#).unwrap();
        assert_eq!(s.ui_scale, 1.5);
        assert_eq!(s.llm.model, "m");
        assert_eq!(s.llm.endpoint, LlmSettings::default().endpoint);
        assert_eq!(s.contact_email, "john.doe@athlete.com");
    }

    #[test]
    fn sanitize_clamps() {
        let s = AppSettings {
            ui_scale: 9.0,
            llm: LlmSettings {
                temperature: -1.0,
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.ui_scale, MAX_UI_SCALE);
        assert_eq!(s.llm.temperature, 0.0);
        assert_eq!(s.llm.timeout_secs, 30);
    }
}
