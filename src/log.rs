use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json;

use crate::err::Error;
use crate::track::{Event, Timeline};

#[derive(Clone, Debug, Serialize)]
pub struct LogMessage {
    pub tick: u64,
    pub tag: &'static str,
    pub data: Event,
}

/// Writes events as newline separated JSON objects
pub struct Journal<W: Write> {
    out: W,
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Journal<W> {
        Journal { out: out }
    }

    pub fn log(&mut self, event: &Event) -> Result<(), Error> {
        let msg = LogMessage {
            tick: event.tick(),
            tag: event.tag(),
            data: *event,
        };
        let line = serde_json::to_string(&msg)? + "\n";
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    pub fn log_timeline(&mut self, timeline: &Timeline) -> Result<(), Error> {
        for event in timeline.events() {
            self.log(event)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// First of `pattern`, `stem-1.ext`, `stem-2.ext`, ... that does not exist
pub fn unique_filename(pattern: &str) -> OsString {
    let orig = Path::new(pattern);
    let stem = orig.file_stem().and_then(|s| s.to_str()).unwrap_or("textune");
    let ext = orig.extension().and_then(|s| s.to_str()).unwrap_or("log");

    let mut i = 1;
    let mut buff = PathBuf::from(pattern);
    while buff.exists() {
        buff.set_file_name(format!("{}-{}.{}", stem, i, ext));
        i += 1;
    }
    buff.into_os_string()
}
