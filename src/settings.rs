//! Game settings and tuning
//!
//! Loaded from a JSON file next to the binary (or the path in
//! `RALLY_PONG_SETTINGS`). Every field has a default, so partial files work.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "rally-pong.json";
/// Environment variable overriding the settings path
pub const SETTINGS_ENV: &str = "RALLY_PONG_SETTINGS";

/// Errors raised while reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid settings in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// AI opponent tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// Right paddle is computer controlled
    pub enabled: bool,
    /// Fraction of the distance to the target covered per tick
    pub difficulty: f32,
    /// Upper bound on the AI step per tick
    pub max_speed: f32,
    /// Probability per tick of aiming at a perturbed target
    pub error_chance: f64,
    /// Perturbation is uniform in `[-error_range, error_range]`
    pub error_range: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            difficulty: AI_DIFFICULTY,
            max_speed: AI_MAX_SPEED,
            error_chance: AI_ERROR_CHANCE,
            error_range: AI_ERROR_RANGE,
        }
    }
}

/// Power-up spawn and effect tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpSettings {
    pub enabled: bool,
    pub spawn_chance: f64,
    pub size: f32,
    pub band_width: f32,
    pub edge_inset: f32,
    pub visible_secs: f32,
    pub effect_secs: f32,
    pub enlarge_factor: f32,
    pub shrink_factor: f32,
    pub speed_magnitude: f32,
}

impl Default for PowerUpSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_chance: POWERUP_SPAWN_CHANCE,
            size: POWERUP_SIZE,
            band_width: POWERUP_BAND_WIDTH,
            edge_inset: POWERUP_EDGE_INSET,
            visible_secs: POWERUP_VISIBLE_SECS,
            effect_secs: POWERUP_EFFECT_SECS,
            enlarge_factor: ENLARGE_FACTOR,
            shrink_factor: SHRINK_FACTOR,
            speed_magnitude: SPEED_EFFECT_MAGNITUDE,
        }
    }
}

/// Audio cue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory holding `paddle.wav` and `score.wav`
    pub clip_dir: PathBuf,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            clip_dir: PathBuf::from("."),
            muted: false,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_base_speed: f32,
    pub ball_max_speed: f32,

    // === Match ===
    pub winning_score: u32,

    pub ai: AiSettings,
    pub powerups: PowerUpSettings,
    pub audio: AudioSettings,

    // === HUD ===
    /// Log the measured frame rate with the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            ball_base_speed: BALL_BASE_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            winning_score: WINNING_SCORE,
            ai: AiSettings::default(),
            powerups: PowerUpSettings::default(),
            audio: AudioSettings::default(),
            show_fps: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the settings path from the environment, falling back to
    /// [`SETTINGS_FILE`] in the working directory
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings, using defaults when the file is absent or invalid
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        std::fs::write(path, json).map_err(io_err)
    }

    /// Replace out-of-range values with defaults so the simulation clamps
    /// always have a valid range to work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let positive = |name: &str, value: &mut f32, fallback: f32| {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("Setting {name}={value} is not positive, using {fallback}");
                *value = fallback;
            }
        };
        positive("court_width", &mut self.court_width, defaults.court_width);
        positive("court_height", &mut self.court_height, defaults.court_height);
        positive("paddle_width", &mut self.paddle_width, defaults.paddle_width);
        positive("paddle_height", &mut self.paddle_height, defaults.paddle_height);
        positive("paddle_speed", &mut self.paddle_speed, defaults.paddle_speed);
        positive("ball_size", &mut self.ball_size, defaults.ball_size);
        positive("ball_base_speed", &mut self.ball_base_speed, defaults.ball_base_speed);
        positive("ball_max_speed", &mut self.ball_max_speed, defaults.ball_max_speed);
        positive("ai.max_speed", &mut self.ai.max_speed, defaults.ai.max_speed);
        positive("powerups.size", &mut self.powerups.size, defaults.powerups.size);

        if self.ball_base_speed > self.ball_max_speed {
            log::warn!(
                "ball_base_speed {} exceeds ball_max_speed {}, capping",
                self.ball_base_speed,
                self.ball_max_speed
            );
            self.ball_base_speed = self.ball_max_speed;
        }

        // Enlarged paddles must still fit in the court
        let tallest = self.paddle_height * self.powerups.enlarge_factor.max(1.0);
        if tallest > self.court_height {
            log::warn!("Paddles do not fit the court, using default sizes");
            self.court_height = defaults.court_height.max(self.court_height);
            self.paddle_height = defaults.paddle_height;
            self.powerups.enlarge_factor = defaults.powerups.enlarge_factor;
        }
        let shrink = self.powerups.shrink_factor;
        if !(shrink > 0.0 && shrink <= 1.0) {
            log::warn!(
                "powerups.shrink_factor={shrink} outside (0, 1], using {}",
                defaults.powerups.shrink_factor
            );
            self.powerups.shrink_factor = defaults.powerups.shrink_factor;
        }

        self.ai.error_chance = self.ai.error_chance.clamp(0.0, 1.0);
        self.ai.error_range = self.ai.error_range.abs();
        self.ai.difficulty = self.ai.difficulty.max(0.0);
        self.powerups.spawn_chance = self.powerups.spawn_chance.clamp(0.0, 1.0);
        self.powerups.speed_magnitude = self
            .powerups
            .speed_magnitude
            .clamp(0.0, self.ball_max_speed);

        if self.winning_score == 0 {
            self.winning_score = defaults.winning_score;
        }

        self
    }
}
