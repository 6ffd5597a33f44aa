use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the layout origin sits. Entry coordinates are offsets from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OriginPlacement {
    /// Entries are positioned around the absolute canvas center.
    CanvasCenter,
    /// Entries are positioned around a caller-owned origin at (0, 0).
    Relative,
}

/// How the center node's base scale is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum CenterScale {
    /// Fixed scale regardless of canvas size.
    Fixed { value: f32 },
    /// Scale derived from the short canvas edge: `min(w, h) / reference`.
    CanvasNormalized { reference: f32 },
}

impl CenterScale {
    pub fn resolve(&self, canvas_width: f32, canvas_height: f32) -> f32 {
        match *self {
            CenterScale::Fixed { value } => value,
            CenterScale::CanvasNormalized { reference } => {
                canvas_width.min(canvas_height) / reference.max(1.0)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    /// Capacity of ring 1; later rings grow by `growth_factor`.
    pub first_ring_capacity: usize,
    /// Multiplier applied to the previous ring's capacity, integer-truncated.
    pub growth_factor: f32,
    /// Radial distance between successive rings.
    pub ring_spacing: f32,
    /// Angle of the first slot on every ring, in radians. `-PI/2` puts it
    /// at 12 o'clock; rings share the offset so their first slots align.
    pub start_angle: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            first_ring_capacity: 6,
            growth_factor: 1.5,
            ring_spacing: 160.0,
            start_angle: -std::f32::consts::FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    pub center: CenterScale,
    /// Lower bound on the per-ring scale factor.
    pub floor: f32,
    /// Scale lost per ring of depth.
    pub decay: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            center: CenterScale::Fixed { value: 1.0 },
            floor: 0.6,
            decay: 0.12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandConfig {
    /// Scale multiplier applied to an expanded node on top of the base scale.
    pub scale_multiplier: f32,
    /// Extra clearance kept between the expanded node and its neighbors,
    /// as a fraction of their combined radii.
    pub padding_fraction: f32,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            scale_multiplier: 2.0,
            padding_fraction: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub origin: OriginPlacement,
    pub ring: RingConfig,
    pub scale: ScaleConfig,
    pub expand: ExpandConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: OriginPlacement::CanvasCenter,
            ring: RingConfig::default(),
            scale: ScaleConfig::default(),
            expand: ExpandConfig::default(),
        }
    }
}

// Partial mirror of `LayoutConfig` for config files: every field optional,
// unknown fields rejected, missing fields left at their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    origin: Option<OriginPlacement>,
    ring: Option<RingConfigFile>,
    scale: Option<ScaleConfigFile>,
    expand: Option<ExpandConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RingConfigFile {
    first_ring_capacity: Option<usize>,
    growth_factor: Option<f32>,
    ring_spacing: Option<f32>,
    start_angle: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ScaleConfigFile {
    center: Option<CenterScale>,
    floor: Option<f32>,
    decay: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ExpandConfigFile {
    scale_multiplier: Option<f32>,
    padding_fraction: Option<f32>,
}

fn apply_config_file(config: &mut LayoutConfig, parsed: ConfigFile) {
    if let Some(v) = parsed.origin {
        config.origin = v;
    }
    if let Some(ring) = parsed.ring {
        if let Some(v) = ring.first_ring_capacity {
            config.ring.first_ring_capacity = v;
        }
        if let Some(v) = ring.growth_factor {
            config.ring.growth_factor = v;
        }
        if let Some(v) = ring.ring_spacing {
            config.ring.ring_spacing = v;
        }
        if let Some(v) = ring.start_angle {
            config.ring.start_angle = v;
        }
    }
    if let Some(scale) = parsed.scale {
        if let Some(v) = scale.center {
            config.scale.center = v;
        }
        if let Some(v) = scale.floor {
            config.scale.floor = v;
        }
        if let Some(v) = scale.decay {
            config.scale.decay = v;
        }
    }
    if let Some(expand) = parsed.expand {
        if let Some(v) = expand.scale_multiplier {
            config.expand.scale_multiplier = v;
        }
        if let Some(v) = expand.padding_fraction {
            config.expand.padding_fraction = v;
        }
    }
}

/// Loads a partial config file (JSON or JSON5) on top of the defaults.
/// `None` yields the defaults unchanged.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let mut config = LayoutConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)?,
    };
    apply_config_file(&mut config, parsed);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.ring.first_ring_capacity, 6);
        assert_eq!(config.ring.growth_factor, 1.5);
        assert_eq!(config.scale.floor, 0.6);
        assert_eq!(config.scale.decay, 0.12);
        assert_eq!(config.expand.scale_multiplier, 2.0);
        assert_eq!(config.expand.padding_fraction, 0.2);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut config = LayoutConfig::default();
        let parsed: ConfigFile =
            serde_json::from_str(r#"{"ring": {"ringSpacing": 220.0}}"#).unwrap();
        apply_config_file(&mut config, parsed);
        assert_eq!(config.ring.ring_spacing, 220.0);
        assert_eq!(config.ring.first_ring_capacity, 6);
    }

    #[test]
    fn center_scale_variants_resolve() {
        let fixed = CenterScale::Fixed { value: 1.0 };
        assert_eq!(fixed.resolve(800.0, 600.0), 1.0);
        let normalized = CenterScale::CanvasNormalized { reference: 600.0 };
        assert!((normalized.resolve(800.0, 600.0) - 1.0).abs() < 1e-6);
        assert!((normalized.resolve(800.0, 300.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn unknown_config_fields_are_rejected() {
        let parsed = serde_json::from_str::<ConfigFile>(r#"{"rings": {}}"#);
        assert!(parsed.is_err());
    }
}
