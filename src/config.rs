//!

use camino::Utf8Path;
use crate::{
    blink::DEFAULT_BLINK_INTERVAL,
    error::InputResult,
    mode::{CursorMode, EchoMode},
};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::time::Duration;

/// The options of an input field, in a form that can be stored as JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    /// Shown while the input is empty.
    pub placeholder: String,
    pub blink_interval_ms: u64,
    pub echo_mode: EchoMode,
    /// The char shown in place of each column of masked text.
    pub mask: char,
    /// The maximum number of chars. `0` means unlimited.
    pub char_limit: usize,
    /// The number of columns of text to show at once. `0` means unbounded.
    pub width: u16,
    pub cursor_mode: CursorMode,
    /// Render without colors or reverse video, for dumb terminals.
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            blink_interval_ms: DEFAULT_BLINK_INTERVAL.as_millis() as u64,
            echo_mode: EchoMode::Normal,
            mask: '*',
            char_limit: 0,
            width: 0,
            cursor_mode: CursorMode::Blink,
            plain: false,
        }
    }
}

impl Config {
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn from_json_str(json: &str) -> InputResult<Self> {
        if json.trim().is_empty() {
            Ok(Self::default())
        } else {
            Ok(serde_json::from_str::<Self>(json)?)
        }
    }

    /// Read a config file. A missing or empty file yields the defaults.
    pub fn read_from_file(filepath: impl AsRef<Utf8Path>) -> InputResult<Self> {
        let filepath = filepath.as_ref();
        if !filepath.exists() {
            log::debug!("[config] no file at {filepath}, using defaults");
            return Ok(Self::default());
        }
        let mut file = File::open(filepath)?;
        let mut contents = String::with_capacity(1024);
        file.read_to_string(&mut contents)?;
        Self::from_json_str(&contents)
    }

    pub fn write_to_file(&self, filepath: impl AsRef<Utf8Path>) -> InputResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(filepath.as_ref())?;
        let json: String = serde_json::to_string_pretty(&self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
