use byteorder::{BigEndian, ByteOrder};

use crate::err::EncodeErr;

use super::events::Event;

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const META: u8 = 0xFF;
pub const META_TEMPO: u8 = 0x51;

const MAX_CHANNEL: u8 = 15;
const MAX_DATA: u8 = 127;
const MAX_TEMPO: u32 = 0x00FF_FFFF;

/// Wire-level form of an event, as accepted by a sequenced synthesizer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Message {
    /// Channel voice message: status, first and second data byte
    Short(u8, u8, u8),
    /// Meta message type and its 3 byte payload
    Meta(u8, [u8; 3]),
}

impl Message {
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Message::Short(status, data1, _) if status & 0xF0 == PROGRAM_CHANGE => {
                vec![status, data1]
            }
            Message::Short(status, data1, data2) => vec![status, data1, data2],
            Message::Meta(kind, data) => {
                vec![META, kind, data.len() as u8, data[0], data[1], data[2]]
            }
        }
    }

    /// Microseconds per quarter note carried by a tempo message
    pub fn tempo(&self) -> Option<u32> {
        match *self {
            Message::Meta(META_TEMPO, ref data) => Some(BigEndian::read_u24(data)),
            _ => None,
        }
    }
}

fn channel(chan: u8) -> Result<u8, EncodeErr> {
    if chan > MAX_CHANNEL {
        return Err(EncodeErr::InvalidChannel(chan));
    }
    Ok(chan)
}

fn data(val: u8) -> Result<u8, EncodeErr> {
    if val > MAX_DATA {
        return Err(EncodeErr::InvalidData(val));
    }
    Ok(val)
}

pub fn encode(event: &Event) -> Result<Message, EncodeErr> {
    match *event {
        Event::NoteOn {
            channel: chan,
            pitch,
            velocity,
            ..
        } => Ok(Message::Short(
            NOTE_ON + channel(chan)?,
            data(pitch)?,
            data(velocity)?,
        )),
        Event::NoteOff {
            channel: chan,
            pitch,
            velocity,
            ..
        } => Ok(Message::Short(
            NOTE_OFF + channel(chan)?,
            data(pitch)?,
            data(velocity)?,
        )),
        Event::ProgramChange {
            channel: chan,
            instrument,
            ..
        } => Ok(Message::Short(
            PROGRAM_CHANGE + channel(chan)?,
            data(instrument)?,
            0,
        )),
        Event::TempoChange {
            micros_per_quarter, ..
        } => {
            if micros_per_quarter > MAX_TEMPO {
                return Err(EncodeErr::TempoOutOfRange(micros_per_quarter));
            }
            let mut payload = [0; 3];
            BigEndian::write_u24(&mut payload, micros_per_quarter);
            Ok(Message::Meta(META_TEMPO, payload))
        }
    }
}
