extern crate textune;

use std::io;
use std::io::Read;

use textune::{
    render, Config, Error, Event, Memory, Message, Playback, RestPolicy, Session, Step, Timeline,
    DEFAULT_DURATION,
};

const PROSE: &str = "Once upon a time, a badger found a flute.
He played it BPM+ until dawn; the hedgehogs danced?
Nobody -- not even the owl -- could stop the music!
";

fn config() -> Config {
    Config {
        seed: Some(9),
        ..Config::default()
    }
}

fn notes(timeline: &Timeline, on: bool) -> Vec<(u8, u8, u64)> {
    timeline
        .events()
        .iter()
        .filter_map(|evt| match *evt {
            Event::NoteOn {
                pitch,
                velocity,
                tick,
                ..
            } if on => Some((pitch, velocity, tick)),
            Event::NoteOff {
                pitch,
                velocity,
                tick,
                ..
            } if !on => Some((pitch, velocity, tick)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_scale_scenario() {
    let timeline = render("AB CD".as_bytes(), &config()).unwrap();

    assert_eq!(
        notes(&timeline, true),
        vec![(9, 100, 24), (10, 100, 28), (0, 127, 32), (2, 127, 36)]
    );
    assert_eq!(timeline.cursor(), 24 + 4 * DEFAULT_DURATION);
}

#[test]
fn test_every_note_is_paired() {
    let timeline = render(PROSE.as_bytes(), &config()).unwrap();
    let on = notes(&timeline, true);
    let off = notes(&timeline, false);

    assert!(!on.is_empty());
    assert_eq!(on.len(), off.len());
    for (on, off) in on.iter().zip(off.iter()) {
        assert_eq!(on.0, off.0);
        assert_eq!(on.2 + DEFAULT_DURATION, off.2);
    }
    let last = off.last().unwrap();
    assert_eq!(timeline.cursor(), last.2);
}

#[test]
fn test_ticks_never_decrease() {
    let timeline = render(PROSE.as_bytes(), &config()).unwrap();
    let ticks = timeline
        .events()
        .iter()
        .map(|evt| evt.tick())
        .collect::<Vec<_>>();

    for pair in ticks.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} is out of order", pair);
    }
}

#[test]
fn test_prose_raises_tempo() {
    let timeline = render(PROSE.as_bytes(), &config()).unwrap();
    let tempos = timeline
        .events()
        .iter()
        .filter_map(|evt| match *evt {
            Event::TempoChange {
                micros_per_quarter, ..
            } => Some(micros_per_quarter),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(tempos, vec![500_000, 300_000]);
}

#[test]
fn test_fallback_reproduces_bound_note() {
    let mut session = Session::new(config());
    assert_eq!(session.feed('F'), Step::Bound(textune::ActionKind::NewNote));
    assert_eq!(session.feed('!'), Step::Replay(textune::ActionKind::NewNote));

    let on = notes(session.timeline(), true);
    assert_eq!(on, vec![(5, 100, 24), (5, 100, 28)]);
}

#[test]
fn test_first_rest_is_silent_noop() {
    let mut session = Session::new(config());
    session.feed(';');
    assert_eq!(session.timeline().len(), 2);
    assert_eq!(session.timeline().cursor(), 24);
    assert_eq!(session.state().volume, 100);
}

#[test]
fn test_first_rest_with_sentinel() {
    let mut session = Session::new(Config {
        rest_policy: RestPolicy::Sentinel,
        ..config()
    });
    session.feed(';');
    assert_eq!(notes(session.timeline(), true), vec![(0, 0, 24)]);
    assert_eq!(session.state().volume, 100);
}

#[test]
fn test_loud_volume_is_dropped_but_advances() {
    let timeline = render(
        "AA".as_bytes(),
        &Config {
            volume: 200,
            ..config()
        },
    )
    .unwrap();

    assert!(notes(&timeline, true).is_empty());
    assert_eq!(timeline.dropped(), 4);
    assert_eq!(timeline.cursor(), 32);
}

#[test]
fn test_space_brings_volume_back_in_range() {
    let timeline = render(
        "A A".as_bytes(),
        &Config {
            volume: 200,
            ..config()
        },
    )
    .unwrap();
    assert_eq!(notes(&timeline, true), vec![(9, 127, 28)]);
}

#[test]
fn test_bad_channel_keeps_tempo_only() {
    let timeline = render(
        "CDE".as_bytes(),
        &Config {
            channel: 16,
            ..config()
        },
    )
    .unwrap();

    assert_eq!(
        timeline.events(),
        &[Event::TempoChange {
            micros_per_quarter: 500_000,
            tick: 24,
        }]
    );
    assert_eq!(timeline.cursor(), 36);
}

struct FailAfter {
    data: &'static [u8],
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.data.read(buf)
    }
}

#[test]
fn test_input_failure_is_reported() {
    let res = render(FailAfter { data: b"CDE" }, &config());
    assert_eq!(res, Err(Error::Io(String::from("pipe closed"))));
}

#[test]
fn test_playback_sends_wire_messages() {
    let timeline = render("C".as_bytes(), &config()).unwrap();
    let mut playback = Playback::new(&timeline, 4);
    let mut sink = Memory::new();
    assert_eq!(playback.run(&mut sink, false), 4);

    assert_eq!(
        sink.messages(),
        vec![
            Message::Meta(0x51, [0x07, 0xA1, 0x20]),
            Message::Short(0xC0, 0, 0),
            Message::Short(0x90, 0, 100),
            Message::Short(0x80, 0, 100),
        ]
    );
}
