use tracing::debug;

use crate::config::Config;
use crate::track::{Event, Timeline};

pub const MIN_OCTAVE: i32 = -1;
pub const MAX_OCTAVE: i32 = 9;
pub const MAX_VOLUME: u8 = 127;

/// Mutable performance state for one session
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerfState {
    pub octave: i32,
    pub volume: u8,
    pub instrument: u8,
    pub channel: u8,
    pub bpm: f32,
}

impl PerfState {
    pub fn new(config: &Config) -> PerfState {
        PerfState {
            octave: MIN_OCTAVE,
            volume: config.volume,
            instrument: config.instrument,
            channel: config.channel,
            bpm: config.bpm,
        }
    }

    pub fn increase_octave(&mut self) {
        let octave = self.octave + 1;
        self.octave = if octave > MAX_OCTAVE { MIN_OCTAVE } else { octave };
    }

    pub fn decrease_octave(&mut self) {
        let octave = self.octave - 1;
        self.octave = if octave < MIN_OCTAVE { MAX_OCTAVE } else { octave };
    }

    pub fn double_volume(&mut self) {
        let volume = u16::from(self.volume) * 2;
        self.volume = volume.min(u16::from(MAX_VOLUME)) as u8;
    }

    pub fn set_instrument(&mut self, instrument: u8, timeline: &mut Timeline) {
        timeline.append(Event::ProgramChange {
            channel: self.channel,
            instrument: instrument,
            tick: timeline.cursor(),
        });
        self.instrument = instrument;
    }

    /// Raise the tempo by `delta` bpm. The new tempo is only written to the
    /// timeline while it stays positive.
    pub fn increase_tempo(&mut self, delta: f32, timeline: &mut Timeline) {
        self.bpm += delta;
        self.write_tempo(timeline);
    }

    pub fn write_tempo(&self, timeline: &mut Timeline) -> bool {
        if self.bpm <= 0.0 {
            debug!("skipping tempo change to {} bpm", self.bpm);
            return false;
        }
        let mpq = (60_000_000.0 / f64::from(self.bpm)) as u32;
        timeline.append(Event::TempoChange {
            micros_per_quarter: mpq,
            tick: timeline.cursor(),
        })
    }
}
