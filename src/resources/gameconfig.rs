//! Game configuration resource.
//!
//! Settings loaded from an INI file, with defaults that let the game start
//! without one. Command-line flags are applied on top by `main`.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 800
//! height = 600
//!
//! [window]
//! width = 800
//! height = 600
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [input]
//! touch_controls = auto   ; auto | always | never
//!
//! [game]
//! start_scene = boot
//! debug = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::scene::SceneId;
use crate::resources::touch::TouchMode;

const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    pub touch_mode: TouchMode,
    /// Scene started after setup.
    pub start_scene: SceneId,
    /// Start with the debug overlay on.
    pub debug: bool,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            touch_mode: TouchMode::Auto,
            start_scene: SceneId::Boot,
            debug: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or malformed values keep their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        if let Some(mode) = config.get("input", "touch_controls") {
            match TouchMode::parse(&mode) {
                Some(m) => self.touch_mode = m,
                None => warn!("Unknown touch_controls value '{}', keeping {:?}", mode, self.touch_mode),
            }
        }
        if let Some(scene) = config.get("game", "start_scene") {
            match SceneId::parse(&scene) {
                Some(s) => self.start_scene = s,
                None => warn!("Unknown start_scene '{}', keeping {:?}", scene, self.start_scene),
            }
        }
        if let Some(debug) = config.getbool("game", "debug").ok().flatten() {
            self.debug = debug;
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, fullscreen={}, touch={:?}, start={:?}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.touch_mode,
            self.start_scene
        );

        Ok(())
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.set("input", "touch_controls", Some(self.touch_mode.as_str().to_string()));

        let scene = format!("{:?}", self.start_scene).to_ascii_lowercase();
        config.set("game", "start_scene", Some(scene));
        config.set("game", "debug", Some(self.debug.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("leyenda_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults_match_view() {
        let c = GameConfig::new();
        assert_eq!((c.render_width, c.render_height), (800, 600));
        assert_eq!(c.start_scene, SceneId::Boot);
        assert_eq!(c.touch_mode, TouchMode::Auto);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path(temp_path("missing"));
        let err = c.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
        assert_eq!(c.window_width, 800);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(
            &path,
            "[window]\nwidth = 1024\nfullscreen = true\n[input]\ntouch_controls = always\n[game]\nstart_scene = level2\n",
        )
        .unwrap();
        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(c.window_width, 1024);
        assert_eq!(c.window_height, 600);
        assert!(c.fullscreen);
        assert_eq!(c.touch_mode, TouchMode::Always);
        assert_eq!(c.start_scene, SceneId::Level2);
        assert!(!c.debug);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut c = GameConfig::with_path(&path);
        c.target_fps = 144;
        c.touch_mode = TouchMode::Never;
        c.start_scene = SceneId::GameOver;
        c.debug = true;
        c.save_to_file().unwrap();
        let mut back = GameConfig::with_path(&path);
        back.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.target_fps, 144);
        assert_eq!(back.touch_mode, TouchMode::Never);
        assert_eq!(back.start_scene, SceneId::GameOver);
        assert!(back.debug);
    }
}
