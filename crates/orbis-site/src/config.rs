use std::path::Path;

use anyhow::Context;
use orbis_scene::SceneSettings;

/// Loads scene settings from `path`, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<SceneSettings> {
    let Some(path) = path else {
        return Ok(SceneSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let settings = parse_settings(&text)
        .with_context(|| format!("invalid settings file {}", path.display()))?;
    log::info!("loaded scene settings from {}", path.display());
    Ok(settings)
}

pub fn parse_settings(text: &str) -> anyhow::Result<SceneSettings> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_gives_defaults() {
        let s = load_settings(None).unwrap();
        assert_eq!(s.particle_count, SceneSettings::default().particle_count);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = parse_settings("particle_count = 100\n[shading]\nspeed = 0.5\n").unwrap();
        assert_eq!(s.particle_count, 100);
        assert_eq!(s.shading.speed, 0.5);
        assert_eq!(s.shading.intensity, 7.0);
        assert_eq!(s.mesh_detail, 96);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_settings(Some(Path::new("/nonexistent/orbis.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_settings("particle_count = \"many\"").is_err());
    }
}
