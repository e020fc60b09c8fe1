use std::io::Read;

use tracing::debug;

use crate::config::Config;
use crate::err::Error;
use crate::input::Chars;
use crate::interp::{Interpreter, Step};
use crate::state::PerfState;
use crate::track::Timeline;

/// One rendering of one input source. A session is never reused; load a new
/// source by creating a new session.
pub struct Session {
    config: Config,
    state: PerfState,
    timeline: Timeline,
    interp: Interpreter,
}

impl Session {
    /// Start a session, writing the initial tempo and program at the start
    /// tick.
    pub fn new(config: Config) -> Session {
        let mut state = PerfState::new(&config);
        let mut timeline = Timeline::new(config.start_tick);
        state.write_tempo(&mut timeline);
        state.set_instrument(config.instrument, &mut timeline);
        debug!("new session at tick {}", config.start_tick);

        Session {
            interp: Interpreter::new(&config),
            config: config,
            state: state,
            timeline: timeline,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &PerfState {
        &self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Switch to program `id` at the current cursor, between characters.
    pub fn set_instrument(&mut self, id: u8) {
        self.state.set_instrument(id, &mut self.timeline);
    }

    pub fn feed(&mut self, character: char) -> Step {
        self.interp
            .step(character, &mut self.state, &mut self.timeline)
    }

    pub fn feed_str(&mut self, txt: &str) {
        for c in txt.chars() {
            self.feed(c);
        }
    }

    /// Interpret everything `reader` yields. On a read error the events
    /// produced so far stay in the session. Returns the number of characters
    /// consumed.
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<usize, Error> {
        let mut count = 0;
        for c in Chars::new(reader) {
            self.feed(c?);
            count += 1;
        }
        debug!("read {} characters, cursor at {}", count, self.timeline.cursor());
        Ok(count)
    }

    pub fn finish(self) -> Timeline {
        self.timeline
    }
}
