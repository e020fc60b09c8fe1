use std::fs;
use std::path::Path;

use serde_json;

use crate::err::{Error, SysErr};

pub const DEFAULT_VOLUME: u8 = 100;
pub const DEFAULT_BPM: f32 = 120.0;
pub const TIME_BEGIN: u64 = 24;
pub const TEMPO_STEP: f32 = 80.0;
/// Ticks per quarter note
pub const RESOLUTION: u16 = 4;

/// Which flavour of the instrument bound characters to use
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Newline picks a random program, repeats without a previous note swap
    /// to the special instrument for one note
    Rich,
    /// Newline re-applies the current program, no instrument swaps
    Plain,
}

/// What a rest does before any note letter has been read
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestPolicy {
    Skip,
    Sentinel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub volume: u8,
    pub instrument: u8,
    pub channel: u8,
    pub start_tick: u64,
    pub bpm: f32,
    pub tempo_step: f32,
    pub resolution: u16,
    pub variant: Variant,
    pub rest_policy: RestPolicy,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            volume: DEFAULT_VOLUME,
            instrument: 0,
            channel: 0,
            start_tick: TIME_BEGIN,
            bpm: DEFAULT_BPM,
            tempo_step: TEMPO_STEP,
            resolution: RESOLUTION,
            variant: Variant::Rich,
            rest_policy: RestPolicy::Skip,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json(txt: &str) -> Result<Config, Error> {
        let config: Config = serde_json::from_str(txt)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
        let txt = fs::read_to_string(path)?;
        Config::from_json(&txt)
    }

    fn validate(&self) -> Result<(), SysErr> {
        if self.resolution == 0 {
            return Err(SysErr::InvalidConfig);
        }
        Ok(())
    }
}
