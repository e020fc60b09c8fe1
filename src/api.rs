use std::io::Read;

use serde_json;

use crate::config::Config;
use crate::err::Error;
use crate::session::Session;
use crate::track::{encode, Event, Message, Timeline};

/// Interpret a whole input source in a fresh session
pub fn render<R: Read>(input: R, config: &Config) -> Result<Timeline, Error> {
    let mut session = Session::new(config.clone());
    session.read_from(input)?;
    Ok(session.finish())
}

/// Render `program` and describe the result as a JSON document holding the
/// events, their wire messages and the final cursor.
pub fn simulate(program: &str, config: &Config) -> Result<String, Error> {
    #[derive(Serialize)]
    struct Results<'a> {
        program: &'a str,
        config: &'a Config,
        cursor: u64,
        dropped: usize,
        events: &'a [Event],
        messages: Vec<Message>,
    }

    let timeline = render(program.as_bytes(), config)?;
    let mut messages = Vec::with_capacity(timeline.len());
    for event in timeline.events() {
        messages.push(encode(event)?);
    }

    let results = Results {
        program: program,
        config: config,
        cursor: timeline.cursor(),
        dropped: timeline.dropped(),
        events: timeline.events(),
        messages: messages,
    };

    Ok(serde_json::to_string(&results)?)
}
