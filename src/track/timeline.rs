use tracing::warn;

use super::encode::encode;
use super::events::Event;

/// Append-only, time ordered list of performance events.
///
/// The cursor is the tick at which new events are inserted. It only moves
/// forward, and only when a note is emitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline {
    events: Vec<Event>,
    cursor: u64,
    dropped: usize,
}

impl Timeline {
    pub fn new(start: u64) -> Timeline {
        Timeline {
            events: Vec::new(),
            cursor: start,
            dropped: 0,
        }
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events rejected by the encoder
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Store an event, unless the wire encoding rejects it. Returns whether
    /// the event was kept.
    pub fn append(&mut self, event: Event) -> bool {
        match encode(&event) {
            Ok(_) => {
                self.events.push(event);
                true
            }
            Err(err) => {
                warn!("dropping {} event at tick {}: {}", event.tag(), event.tick(), err);
                self.dropped += 1;
                false
            }
        }
    }

    /// Insert a note on at the cursor and its note off `duration` ticks
    /// later, then move the cursor past the note.
    pub fn emit_note(&mut self, channel: u8, pitch: u8, velocity: u8, duration: u64) {
        let onset = self.cursor;
        self.append(Event::NoteOn {
            channel: channel,
            pitch: pitch,
            velocity: velocity,
            tick: onset,
        });
        self.append(Event::NoteOff {
            channel: channel,
            pitch: pitch,
            velocity: velocity,
            tick: onset + duration,
        });
        self.cursor = onset + duration;
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pairing() {
        let mut timeline = Timeline::new(24);
        timeline.emit_note(0, 60, 100, 4);
        timeline.emit_note(0, 62, 100, 4);

        assert_eq!(timeline.cursor(), 32);
        assert_eq!(
            timeline.events(),
            &[
                Event::NoteOn {
                    channel: 0,
                    pitch: 60,
                    velocity: 100,
                    tick: 24,
                },
                Event::NoteOff {
                    channel: 0,
                    pitch: 60,
                    velocity: 100,
                    tick: 28,
                },
                Event::NoteOn {
                    channel: 0,
                    pitch: 62,
                    velocity: 100,
                    tick: 28,
                },
                Event::NoteOff {
                    channel: 0,
                    pitch: 62,
                    velocity: 100,
                    tick: 32,
                },
            ]
        );
    }

    #[test]
    fn test_append_keeps_cursor() {
        let mut timeline = Timeline::new(0);
        assert!(timeline.append(Event::ProgramChange {
            channel: 0,
            instrument: 14,
            tick: 0,
        }));
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_rejected_note_still_advances() {
        let mut timeline = Timeline::new(0);
        timeline.emit_note(16, 60, 100, 4);
        assert!(timeline.is_empty());
        assert_eq!(timeline.dropped(), 2);
        assert_eq!(timeline.cursor(), 4);
    }
}
