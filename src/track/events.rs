#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Event {
    NoteOn {
        channel: u8,
        pitch: u8,
        velocity: u8,
        tick: u64,
    },
    NoteOff {
        channel: u8,
        pitch: u8,
        velocity: u8,
        tick: u64,
    },
    ProgramChange {
        channel: u8,
        instrument: u8,
        tick: u64,
    },
    TempoChange {
        micros_per_quarter: u32,
        tick: u64,
    },
}

impl Event {
    pub fn tick(&self) -> u64 {
        match *self {
            Event::NoteOn { tick, .. }
            | Event::NoteOff { tick, .. }
            | Event::ProgramChange { tick, .. }
            | Event::TempoChange { tick, .. } => tick,
        }
    }

    pub fn tag(&self) -> &'static str {
        match *self {
            Event::NoteOn { .. } => "note_on",
            Event::NoteOff { .. } => "note_off",
            Event::ProgramChange { .. } => "program",
            Event::TempoChange { .. } => "tempo",
        }
    }
}
