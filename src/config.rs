//! Runtime configuration.
//!
//! Values come from, lowest precedence first: built-in defaults, `config.toml`
//! (next to the executable, then the working directory, or `--config`), and
//! command-line flags / `RAYCAST_*` environment variables.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::core::{GridMap, MapError};
use crate::engine::SessionSettings;
use crate::types::{
    MoveSettings, Pose, RaySettings, ShadeMode, ViewSettings, FOV, MARCH_STEP, MAX_DEPTH,
    MAX_MARCH_STEPS, MOVE_STEP, ROTATE_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_HEADING, SPAWN_X, SPAWN_Y,
};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_TARGET_FPS: u32 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("screen must be at least 1x1, got {width}x{height}")]
    ZeroScreen { width: u16, height: u16 },
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("target_fps must be at least 1")]
    ZeroFps,
    #[error("camera.step {step} needs {steps:.0} samples to reach max_depth {max_depth} (limit {limit})")]
    StepTooFine {
        step: f32,
        max_depth: f32,
        steps: f32,
        limit: u32,
    },
    #[error("unknown shading mode {0:?} (expected \"ascii\" or \"color\")")]
    UnknownMode(String),
    #[error("invalid map: {0}")]
    Map(#[from] MapError),
}

/// Command-line flags.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "tui-raycaster")]
#[command(about = "First-person raycasting walker for the terminal")]
pub struct Args {
    /// Screen width in characters
    #[arg(long, env = "RAYCAST_WIDTH")]
    pub width: Option<u16>,

    /// Screen height in characters
    #[arg(long, env = "RAYCAST_HEIGHT")]
    pub height: Option<u16>,

    /// Path to a config.toml (skips the default search)
    #[arg(long, short = 'c', env = "RAYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial shading mode: ascii or color
    #[arg(long, short = 'm', env = "RAYCAST_MODE")]
    pub mode: Option<String>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "RAYCAST_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    /// Used when `RUST_LOG` is unset
    pub filter: String,
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session: SessionSettings,
    pub spawn: Pose,
    pub map: GridMap,
    pub target_fps: u32,
    pub log: LogConfig,
    /// The config file that was loaded, if any
    pub source: Option<PathBuf>,
}

// ── TOML schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    screen: TomlScreen,
    #[serde(default)]
    camera: TomlCamera,
    #[serde(default)]
    movement: TomlMovement,
    #[serde(default)]
    spawn: TomlSpawn,
    #[serde(default)]
    map: TomlMap,
    #[serde(default)]
    render: TomlRender,
    #[serde(default)]
    log: TomlLog,
}

#[derive(Deserialize, Debug)]
struct TomlScreen {
    #[serde(default = "default_width")]
    width: u16,
    #[serde(default = "default_height")]
    height: u16,
}

#[derive(Deserialize, Debug)]
struct TomlCamera {
    #[serde(default = "default_fov")]
    fov: f32,
    #[serde(default = "default_max_depth")]
    max_depth: f32,
    #[serde(default = "default_step")]
    step: f32,
}

#[derive(Deserialize, Debug)]
struct TomlMovement {
    #[serde(default = "default_rotate_step")]
    rotate_step: f32,
    #[serde(default = "default_move_step")]
    move_step: f32,
}

#[derive(Deserialize, Debug)]
struct TomlSpawn {
    #[serde(default = "default_spawn_x")]
    x: f32,
    #[serde(default = "default_spawn_y")]
    y: f32,
    #[serde(default = "default_spawn_heading")]
    heading: f32,
}

#[derive(Deserialize, Debug)]
struct TomlMap {
    #[serde(default = "GridMap::default_arena_rows")]
    rows: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct TomlRender {
    #[serde(default = "default_mode")]
    mode: String,
    #[serde(default)]
    parallel: bool,
    #[serde(default = "default_target_fps")]
    target_fps: u32,
}

#[derive(Deserialize, Debug)]
struct TomlLog {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    filter: String,
}

// ── Defaults ──

fn default_width() -> u16 { SCREEN_WIDTH }
fn default_height() -> u16 { SCREEN_HEIGHT }
fn default_fov() -> f32 { FOV }
fn default_max_depth() -> f32 { MAX_DEPTH }
fn default_step() -> f32 { MARCH_STEP }
fn default_rotate_step() -> f32 { ROTATE_STEP }
fn default_move_step() -> f32 { MOVE_STEP }
fn default_spawn_x() -> f32 { SPAWN_X }
fn default_spawn_y() -> f32 { SPAWN_Y }
fn default_spawn_heading() -> f32 { SPAWN_HEADING }
fn default_mode() -> String { ShadeMode::default().as_str().into() }
fn default_target_fps() -> u32 { DEFAULT_TARGET_FPS }
fn default_log_filter() -> String { DEFAULT_LOG_FILTER.into() }

impl Default for TomlScreen {
    fn default() -> Self {
        TomlScreen {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for TomlCamera {
    fn default() -> Self {
        TomlCamera {
            fov: default_fov(),
            max_depth: default_max_depth(),
            step: default_step(),
        }
    }
}

impl Default for TomlMovement {
    fn default() -> Self {
        TomlMovement {
            rotate_step: default_rotate_step(),
            move_step: default_move_step(),
        }
    }
}

impl Default for TomlSpawn {
    fn default() -> Self {
        TomlSpawn {
            x: default_spawn_x(),
            y: default_spawn_y(),
            heading: default_spawn_heading(),
        }
    }
}

impl Default for TomlMap {
    fn default() -> Self {
        TomlMap {
            rows: GridMap::default_arena_rows(),
        }
    }
}

impl Default for TomlRender {
    fn default() -> Self {
        TomlRender {
            mode: default_mode(),
            parallel: false,
            target_fps: default_target_fps(),
        }
    }
}

impl Default for TomlLog {
    fn default() -> Self {
        TomlLog {
            path: None,
            filter: default_log_filter(),
        }
    }
}

// ── Loading ──

impl AppConfig {
    /// Resolve configuration for `args`.
    ///
    /// An explicit `--config` path must exist. Otherwise the first
    /// `config.toml` found in [`candidate_dirs`] is used, and a missing file
    /// means defaults.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let found = match &args.config {
            Some(path) => Some((path.clone(), read(path)?)),
            None => find_config(&candidate_dirs())?,
        };

        let (toml_cfg, source) = match found {
            Some((path, text)) => (parse(&text, &path)?, Some(path)),
            None => (TomlConfig::default(), None),
        };

        let mut config = resolve(toml_cfg, args)?;
        config.source = source;
        Ok(config)
    }

    /// Resolve from TOML text plus flags. Used by [`AppConfig::load`] and tests.
    pub fn from_toml_str(text: &str, args: &Args) -> Result<Self, ConfigError> {
        let toml_cfg = parse(text, Path::new(CONFIG_FILE_NAME))?;
        resolve(toml_cfg, args)
    }

    /// Built-in defaults only.
    pub fn defaults() -> Result<Self, ConfigError> {
        resolve(TomlConfig::default(), &Args::default())
    }

    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / u64::from(self.target_fps.max(1)))
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(text: &str, path: &Path) -> Result<TomlConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn find_config(search_dirs: &[PathBuf]) -> Result<Option<(PathBuf, String)>, ConfigError> {
    for dir in search_dirs {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            let text = read(&path)?;
            return Ok(Some((path, text)));
        }
    }
    Ok(None)
}

/// Directories searched for `config.toml`: exe dir, then CWD (deduplicated).
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn resolve(toml_cfg: TomlConfig, args: &Args) -> Result<AppConfig, ConfigError> {
    let width = args.width.unwrap_or(toml_cfg.screen.width);
    let height = args.height.unwrap_or(toml_cfg.screen.height);
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroScreen { width, height });
    }

    let mode_name = args.mode.as_deref().unwrap_or(&toml_cfg.render.mode);
    let mode =
        ShadeMode::from_str(mode_name).ok_or_else(|| ConfigError::UnknownMode(mode_name.into()))?;

    if toml_cfg.render.target_fps == 0 {
        return Err(ConfigError::ZeroFps);
    }

    let view = ViewSettings {
        width,
        height,
        fov: positive("camera.fov", toml_cfg.camera.fov)?,
    };
    let ray = RaySettings {
        max_depth: positive("camera.max_depth", toml_cfg.camera.max_depth)?,
        step: positive("camera.step", toml_cfg.camera.step)?,
    };
    let steps = ray.max_depth / ray.step;
    if steps > MAX_MARCH_STEPS as f32 {
        return Err(ConfigError::StepTooFine {
            step: ray.step,
            max_depth: ray.max_depth,
            steps,
            limit: MAX_MARCH_STEPS,
        });
    }
    let movement = MoveSettings {
        rotate_step: positive("movement.rotate_step", toml_cfg.movement.rotate_step)?,
        move_step: positive("movement.move_step", toml_cfg.movement.move_step)?,
    };

    let map = GridMap::from_rows(&toml_cfg.map.rows)?;

    Ok(AppConfig {
        session: SessionSettings {
            view,
            ray,
            movement,
            mode,
            parallel: toml_cfg.render.parallel,
        },
        spawn: Pose::new(toml_cfg.spawn.x, toml_cfg.spawn.y, toml_cfg.spawn.heading),
        map,
        target_fps: toml_cfg.render.target_fps,
        log: LogConfig {
            path: args.log_file.clone().or(toml_cfg.log.path),
            filter: toml_cfg.log.filter,
        },
        source: None,
    })
}
