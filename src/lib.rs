mod api;
mod config;
mod err;
mod input;
mod interp;
mod log;
mod pitch;
mod playback;
mod session;
mod sinks;
mod state;
mod track;

extern crate byteorder;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tracing;

pub use crate::api::{render, simulate};
pub use crate::config::{Config, RestPolicy, Variant, DEFAULT_BPM, DEFAULT_VOLUME, TIME_BEGIN};
pub use crate::err::{EncodeErr, Error, SysErr};
pub use crate::input::Chars;
pub use crate::interp::{lookup, ActionKind, Binding, Interpreter, Step, TELEPHONE_RING, TRIGGER};
pub use crate::log::{unique_filename, Journal, LogMessage};
pub use crate::pitch::{full_pitch, is_note, resolve, Note, DEFAULT_DURATION, MAX_SEMITONE};
pub use crate::playback::{dur_to_millis, PauseHandle, Playback, Scheduled};
pub use crate::session::Session;
pub use crate::sinks::{factory, make_sinks, CompositeSink, Console, Memory, Null, Sink};
pub use crate::state::{PerfState, MAX_OCTAVE, MAX_VOLUME, MIN_OCTAVE};
pub use crate::track::{encode, Event, Message, Timeline};
