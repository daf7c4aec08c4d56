use crate::cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "MESSBOOK_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("messbook").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".messbook.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cost_per_dinner: u32,
    pub currency: String,
    pub tick_rate_ms: u64,
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cost_per_dinner: 70,
            currency: String::from("Rs"),
            tick_rate_ms: 500,
            key_map: default_key_map(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = HashMap::new();

    key_map.insert(Key::Char('l'), Cmd::NextDay);
    key_map.insert(Key::Char('h'), Cmd::PrevDay);
    key_map.insert(Key::Char('j'), Cmd::NextWeek);
    key_map.insert(Key::Char('k'), Cmd::PrevWeek);
    key_map.insert(Key::Right, Cmd::NextDay);
    key_map.insert(Key::Left, Cmd::PrevDay);
    key_map.insert(Key::Down, Cmd::NextWeek);
    key_map.insert(Key::Up, Cmd::PrevWeek);
    key_map.insert(Key::Char('L'), Cmd::NextMonth);
    key_map.insert(Key::Char('H'), Cmd::PrevMonth);
    key_map.insert(Key::Char('t'), Cmd::Today);
    key_map.insert(Key::Char(' '), Cmd::ToggleDinner);
    key_map.insert(Key::Char('\n'), Cmd::ToggleDinner);
    key_map.insert(Key::Char('y'), Cmd::Confirm);
    key_map.insert(Key::Char('n'), Cmd::Cancel);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

fn load_config(path: &Path) -> io::Result<Config> {
    let content = fs::read_to_string(path)?;

    toml::from_str(&content).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Loads the explicitly given file, or the first existing one of the default
/// locations, or falls back to the built-in defaults.
pub fn load_suitable_config(explicit: Option<&Path>) -> io::Result<Config> {
    let path = explicit
        .map(PathBuf::from)
        .or_else(|| find_configfile_locations().into_iter().find(|p| p.exists()));

    match path {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}
