//! Layered settings for the visualizer
//!
//! Later layers override earlier ones:
//! 1. `config/default.toml`, checked in
//! 2. `config/user.toml`, local and gitignored
//! 3. Environment variables (`H4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyper4d_core::{RotationAngles, ShapeTemplate};
use hyper4d_view::{ColorMode, ProjectionMode};

/// Config file layers, lowest priority first
const LAYERS: [&str; 2] = ["default.toml", "user.toml"];

/// Everything the binary reads at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape to display and its parameters
    #[serde(default)]
    pub shape: ShapeTemplate,
    /// Initial rotation
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Projection settings
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Animation clock settings
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Coloring settings
    #[serde(default)]
    pub color: ColorConfig,
    /// Frame export settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load from `./config` plus the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load from the layer files in `config_dir` plus the environment
    ///
    /// Missing files are skipped, so an empty directory yields the defaults.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let figment = LAYERS
            .iter()
            .map(|name| config_dir.join(name))
            .filter(|path| path.exists())
            .fold(Figment::new(), |figment, path| figment.merge(Toml::file(path)));

        // H4D_PROJECTION__MODE=orthographic -> projection.mode = "orthographic"
        figment
            .merge(Env::prefixed("H4D_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }
}

/// Initial rotation, in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// YZ-plane angle
    pub x: f32,
    /// XZ-plane angle
    pub y: f32,
    /// XY-plane angle
    pub z: f32,
    /// XW-plane angle
    pub w: f32,
}

impl RotationConfig {
    /// The configured angles in radians
    pub fn to_angles(self) -> RotationAngles {
        RotationAngles::from_degrees(self.x, self.y, self.z, self.w)
    }
}

/// Projection configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// perspective, orthographic or stereographic
    pub mode: ProjectionMode,
    /// Viewpoint distance along W for perspective projection
    pub distance: f32,
    /// Field of view in degrees
    pub fov: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            distance: 5.0,
            fov: 45.0,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Start with the clock running
    pub playing: bool,
    /// Start with auto-rotation enabled
    pub auto_rotate: bool,
    /// Clock speed multiplier
    pub speed: f32,
    /// Auto-rotation rate relative to `speed`
    pub rotation_speed: f32,
    /// Seconds per simulated frame
    pub frame_dt: f32,
    /// Number of frames the binary simulates before exporting
    pub frames: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            playing: false,
            auto_rotate: false,
            speed: 1.0,
            rotation_speed: 0.03,
            frame_dt: 1.0 / 60.0,
            frames: 0,
        }
    }
}

/// Coloring configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// depth, w-coordinate or distance
    pub mode: ColorMode,
}

/// Frame export configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the final frame as RON to this path (skipped when empty)
    pub frame_path: String,
    /// Pretty-print the exported RON
    pub pretty: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Failure to read or merge the config layers
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.shape, ShapeTemplate::tesseract(2.0));
        assert_eq!(config.projection.mode, ProjectionMode::Perspective);
        assert_eq!(config.projection.distance, 5.0);
        assert_eq!(config.color.mode, ColorMode::Depth);
        assert_eq!(config.animation.rotation_speed, 0.03);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("type = \"tesseract\""));
        assert!(toml.contains("mode = \"perspective\""));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [shape]
            type = "duoprism"
            m = 5

            [projection]
            mode = "stereographic"
            "#,
        )
        .unwrap();
        assert_eq!(config.shape, ShapeTemplate::duoprism(5, 4, 2.0));
        assert_eq!(config.projection.mode, ProjectionMode::Stereographic);
        assert_eq!(config.projection.distance, 5.0);
        assert_eq!(config.color, ColorConfig::default());
    }

    #[test]
    fn test_rotation_degrees_to_radians() {
        let rotation = RotationConfig { x: 180.0, y: 0.0, z: 90.0, w: 0.0 };
        let angles = rotation.to_angles();
        assert!((angles.x - std::f32::consts::PI).abs() < 1e-6);
        assert!((angles.z - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_missing_directory_gives_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.shape, AppConfig::default().shape);
    }
}
