use std::sync::{Arc, Mutex};

use crate::track::Message;

use super::sink::Sink;

/// Keeps every message it receives. Clones share the same storage, so one
/// clone can be handed to a playback while another is inspected.
#[derive(Clone, Default)]
pub struct Memory {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Sink for Memory {
    fn name(&self) -> &str {
        "memory"
    }

    fn process(&mut self, msg: Message) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(msg),
            Err(poisoned) => poisoned.into_inner().push(msg),
        }
    }
}
