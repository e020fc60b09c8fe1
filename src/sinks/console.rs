use crate::track::Message;

use super::sink::Sink;

pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console {}
    }
}

impl Sink for Console {
    fn name(&self) -> &str {
        "console"
    }

    fn process(&mut self, msg: Message) {
        let bytes = msg
            .bytes()
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:?} [{}]", msg, bytes);
    }
}
