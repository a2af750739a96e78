//! Runtime-tunable parameters.
//!
//! Defaults come from `constants.rs`; a partial JSON object overrides only the
//! fields it names.

use serde::Deserialize;

use crate::constants::*;
use crate::generation::PinArrangement;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneParams {
    pub hero_threads: usize,
    pub generator_threads: usize,
    pub transition_duration_ms: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            hero_threads: HERO_THREAD_COUNT,
            generator_threads: GENERATOR_THREAD_COUNT,
            transition_duration_ms: TRANSITION_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorParams {
    pub pins: usize,
    pub arrangement: PinArrangement,
    pub line_count: u32,
    pub batch_size: usize,
    pub output_size: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            pins: PIN_COUNT,
            arrangement: PinArrangement::Square,
            line_count: DEFAULT_LINE_COUNT,
            batch_size: BATCH_SIZE,
            output_size: OUTPUT_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneParams,
    pub generator: GeneratorParams,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{"generator": {"lineCount": 1500}}"#).unwrap();
        assert_eq!(cfg.generator.line_count, 1500);
        assert_eq!(cfg.generator.pins, PIN_COUNT);
        assert_eq!(cfg.scene, SceneParams::default());
    }

    #[test]
    fn arrangement_parses_lowercase() {
        let cfg = AppConfig::from_json(r#"{"generator": {"arrangement": "circle"}}"#).unwrap();
        assert_eq!(cfg.generator.arrangement, PinArrangement::Circle);
    }

    #[test]
    fn default_config_uses_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.line_count, DEFAULT_LINE_COUNT);
        assert_eq!(cfg.generator.batch_size, BATCH_SIZE);
        assert_eq!(cfg.generator.pins, PIN_COUNT);
        assert_eq!(cfg.scene.hero_threads, HERO_THREAD_COUNT);
    }
}
