use crate::track::Message;

pub trait Sink {
    fn name(&self) -> &str;

    fn process(&mut self, msg: Message);
}

/// Forwards every message to each of its sinks, in order
pub struct CompositeSink {
    inner: Vec<Box<dyn Sink>>,
    name: String,
}

impl CompositeSink {
    pub fn new(sinks: Vec<Box<dyn Sink>>) -> CompositeSink {
        let name = sinks
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ");

        CompositeSink {
            inner: sinks,
            name: name,
        }
    }
}

impl Sink for CompositeSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&mut self, msg: Message) {
        for sink in &mut self.inner {
            sink.process(msg);
        }
    }
}
