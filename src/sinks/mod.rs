mod console;
mod memory;
mod null;
mod sink;

use crate::err::SysErr;

pub use self::console::Console;
pub use self::memory::Memory;
pub use self::null::Null;
pub use self::sink::{CompositeSink, Sink};

pub fn factory(name: &str) -> Result<Box<dyn Sink>, SysErr> {
    match name {
        "console" | "" => Ok(Box::new(Console::new())),
        "null" => Ok(Box::new(Null::new())),
        "memory" => Ok(Box::new(Memory::new())),
        _ => Err(SysErr::UnknownSink),
    }
}

/// Build the sinks named in a comma separated list, fanning out through a
/// `CompositeSink` when there is more than one
pub fn make_sinks(names: &str) -> Result<Box<dyn Sink>, SysErr> {
    let mut sinks = names
        .split(',')
        .map(|name| factory(name.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    if sinks.len() == 1 {
        if let Some(sink) = sinks.pop() {
            return Ok(sink);
        }
    }
    Ok(Box::new(CompositeSink::new(sinks)))
}
