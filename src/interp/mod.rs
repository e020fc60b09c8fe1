//! # Character interpreter
//!
//! Consumes input one character at a time. Each character is looked up in a
//! fixed table of actions and the bound action is executed against the
//! performance state and the timeline. Characters without a binding replay
//! the most recently bound action, using the arguments captured when it was
//! bound. A four character window over the raw input watches for `BPM+`,
//! which raises the tempo instead of running the `+` action.

mod actions;
mod window;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{Config, RestPolicy, Variant};
use crate::pitch::{self, full_pitch, Note, SENTINEL};
use crate::state::PerfState;
use crate::track::Timeline;

pub use self::actions::{lookup, ActionKind, Binding};
pub use self::window::{Window, TRIGGER};

/// Program swapped in for a repeat that has no note to repeat
pub const TELEPHONE_RING: u8 = 124;

/// Random programs are drawn from `0..RANDOM_PROGRAMS`
pub const RANDOM_PROGRAMS: u8 = 127;

/// What a single interpreter step did
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Step {
    Trigger,
    Bound(ActionKind),
    Replay(ActionKind),
    Ignored,
}

pub struct Interpreter {
    previous_character: char,
    previous_pitch: Option<u8>,
    memo: Option<Binding>,
    window: Window,
    rng: StdRng,
    variant: Variant,
    rest_policy: RestPolicy,
    tempo_step: f32,
}

impl Interpreter {
    pub fn new(config: &Config) -> Interpreter {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Interpreter {
            previous_character: '\0',
            previous_pitch: None,
            memo: None,
            window: Window::new(),
            rng: rng,
            variant: config.variant,
            rest_policy: config.rest_policy,
            tempo_step: config.tempo_step,
        }
    }

    pub fn previous_pitch(&self) -> Option<u8> {
        self.previous_pitch
    }

    pub fn memo(&self) -> Option<Binding> {
        self.memo
    }

    pub fn step(
        &mut self,
        character: char,
        state: &mut PerfState,
        timeline: &mut Timeline,
    ) -> Step {
        self.window.push(character);
        let kind = lookup(character);

        let step = if self.window.is_trigger() {
            debug!("tempo trigger at tick {}", timeline.cursor());
            state.increase_tempo(self.tempo_step, timeline);
            Step::Trigger
        } else if let Some(kind) = kind {
            let binding = self.bind(kind, character);
            self.execute(binding, state, timeline);
            Step::Bound(kind)
        } else if let Some(memo) = self.memo {
            self.execute(memo, state, timeline);
            Step::Replay(memo.kind)
        } else {
            Step::Ignored
        };

        if let Some(kind) = kind {
            self.memo = Some(self.bind(kind, character));
        }

        self.previous_character = character;
        if let Some(note) = pitch::resolve(character) {
            self.previous_pitch = Some(note.semitone);
        }

        step
    }

    fn bind(&self, kind: ActionKind, character: char) -> Binding {
        Binding {
            kind: kind,
            character: character,
            previous_character: self.previous_character,
            previous_pitch: self.previous_pitch,
        }
    }

    fn execute(&mut self, binding: Binding, state: &mut PerfState, timeline: &mut Timeline) {
        match binding.kind {
            ActionKind::NewNote => {
                if let Some(note) = pitch::resolve(binding.character) {
                    play(note, state, timeline);
                }
            }
            ActionKind::DoubleVolume => state.double_volume(),
            ActionKind::IncreaseOctave => state.increase_octave(),
            ActionKind::DecreaseOctave => state.decrease_octave(),
            ActionKind::RepeatNote => self.repeat(binding, state, timeline),
            ActionKind::RandomNote => {
                let letter = pitch::random_letter(&mut self.rng);
                if let Some(note) = pitch::resolve(letter) {
                    play(note, state, timeline);
                }
            }
            ActionKind::NewInstrument => {
                let instrument = match self.variant {
                    Variant::Rich => self.rng.gen_range(0..RANDOM_PROGRAMS),
                    Variant::Plain => state.instrument,
                };
                state.set_instrument(instrument, timeline);
            }
            ActionKind::Rest => self.rest(binding, state, timeline),
        }
    }

    fn repeat(&mut self, binding: Binding, state: &mut PerfState, timeline: &mut Timeline) {
        if pitch::is_note(binding.previous_character) {
            let semitone = binding.previous_pitch.unwrap_or(SENTINEL);
            play(Note::new(semitone), state, timeline);
            return;
        }

        match self.variant {
            Variant::Rich => {
                let current = state.instrument;
                state.set_instrument(TELEPHONE_RING, timeline);
                play(Note::new(SENTINEL), state, timeline);
                state.set_instrument(current, timeline);
            }
            Variant::Plain => play(Note::new(SENTINEL), state, timeline),
        }
    }

    fn rest(&mut self, binding: Binding, state: &mut PerfState, timeline: &mut Timeline) {
        let semitone = match (binding.previous_pitch, self.rest_policy) {
            (Some(semitone), _) => semitone,
            (None, RestPolicy::Sentinel) => SENTINEL,
            (None, RestPolicy::Skip) => return,
        };

        let volume = state.volume;
        state.volume = 0;
        play(Note::new(semitone), state, timeline);
        state.volume = volume;
    }
}

fn play(note: Note, state: &PerfState, timeline: &mut Timeline) {
    let pitch = full_pitch(state.octave, note.semitone);
    timeline.emit_note(state.channel, pitch, state.volume, note.duration);
}
