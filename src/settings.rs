use std::error::Error;
use std::fs;
use std::path::Path;

/// Window and camera parameters, loaded from an optional `settings.yaml`
/// next to the binary. Scene contents are deliberately not configurable.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_fullscreen")]
    pub fullscreen: bool,

    #[serde(default = "default_vsync")]
    pub vsync: bool,

    /// Vertical field of view in degrees.
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,

    /// Directory holding the body textures (sun.jpg, earth.jpg, ...).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    800
}

fn default_fullscreen() -> bool {
    false
}

fn default_vsync() -> bool {
    true
}

fn default_fov_degrees() -> f32 {
    75.0
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: default_width(),
            height: default_height(),
            fullscreen: default_fullscreen(),
            vsync: default_vsync(),
            fov_degrees: default_fov_degrees(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file is not an error, only an
    /// unreadable or unparsable one is.
    pub fn load(path: &Path) -> Result<Settings, Box<dyn Error>> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        let settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_yaml::from_str("width: 640").unwrap();
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, default_height());
        assert!(!settings.fullscreen);
        assert!((settings.fov_degrees - 75.0).abs() < 1e-6);
        assert_eq!(settings.assets_dir, "assets");
    }

    #[test]
    fn fullscreen_can_be_switched_on() {
        let settings: Settings = serde_yaml::from_str("fullscreen: true").unwrap();
        assert!(settings.fullscreen);
        assert_eq!(settings.width, default_width());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("does/not/exist.yaml")).unwrap();
        assert_eq!(settings.width, default_width());
        assert_eq!(settings.vsync, default_vsync());
    }
}
