use std::io::{self, BufReader, Bytes, Read};
use std::str;

const REPLACEMENT: char = '\u{FFFD}';

/// Decodes a byte stream into characters, strictly in order and without
/// reading ahead of the character being decoded. Malformed sequences come out
/// as U+FFFD, one per maximal invalid prefix, the same way
/// `String::from_utf8_lossy` replaces them.
pub struct Chars<R: Read> {
    bytes: Bytes<BufReader<R>>,
    // a byte that broke the previous sequence and starts the next one
    pending: Option<u8>,
}

impl<R: Read> Chars<R> {
    pub fn new(reader: R) -> Chars<R> {
        Chars {
            bytes: BufReader::new(reader).bytes(),
            pending: None,
        }
    }

    fn next_byte(&mut self) -> Option<io::Result<u8>> {
        match self.pending.take() {
            Some(byte) => Some(Ok(byte)),
            None => self.bytes.next(),
        }
    }
}

fn width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Range of the first continuation byte; excludes overlongs, surrogates and
/// code points above U+10FFFF.
fn second_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

impl<R: Read> Iterator for Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<io::Result<char>> {
        let lead = match self.next_byte()? {
            Ok(byte) => byte,
            Err(err) => return Some(Err(err)),
        };

        let len = width(lead);
        if len == 0 {
            return Some(Ok(REPLACEMENT));
        }

        let mut buf = [lead, 0, 0, 0];
        for i in 1..len {
            let byte = match self.bytes.next() {
                Some(Ok(byte)) => byte,
                Some(Err(err)) => return Some(Err(err)),
                None => return Some(Ok(REPLACEMENT)),
            };
            let (lo, hi) = if i == 1 {
                second_range(lead)
            } else {
                (0x80, 0xBF)
            };
            if byte < lo || byte > hi {
                self.pending = Some(byte);
                return Some(Ok(REPLACEMENT));
            }
            buf[i] = byte;
        }

        let decoded = str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(REPLACEMENT);
        Some(Ok(decoded))
    }
}
