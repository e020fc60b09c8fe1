use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::sinks::Sink;
use crate::track::{encode, Message, Timeline};

/// Tempo in effect before the first tempo change (120 bpm)
pub const DEFAULT_MPQ: u32 = 500_000;

pub fn millis_to_dur(millis: f64) -> Duration {
    let secs = (millis / 1000.0).floor();
    let nanos = (millis - (secs * 1000.0)) * 1_000_000.0;
    Duration::new(secs as u64, nanos.round() as u32)
}

pub fn dur_to_millis(dur: Duration) -> f64 {
    let secs = dur.as_secs() as f64 * 1000.0;
    let nanos = f64::from(dur.subsec_nanos()) / 1_000_000.0;
    secs + nanos
}

pub fn ticks_to_millis(ticks: u64, mpq: u32, resolution: u16) -> f64 {
    ticks as f64 * f64::from(mpq) / 1000.0 / f64::from(resolution)
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Scheduled {
    pub at: Duration,
    pub tick: u64,
    pub message: Message,
}

/// Requests a running playback to stop at the next message
#[derive(Clone, Debug)]
pub struct PauseHandle {
    flag: Arc<AtomicBool>,
}

impl PauseHandle {
    pub fn pause(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

/// Wall-clock schedule of a finished timeline
#[derive(Debug)]
pub struct Playback {
    schedule: Vec<Scheduled>,
    position: usize,
    paused: Arc<AtomicBool>,
}

impl Playback {
    pub fn new(timeline: &Timeline, resolution: u16) -> Playback {
        let mut schedule = Vec::with_capacity(timeline.len());
        let mut mpq = DEFAULT_MPQ;
        let mut last_tick = 0;
        let mut elapsed = 0.0;

        for event in timeline.events() {
            let message = match encode(event) {
                Ok(message) => message,
                Err(err) => {
                    warn!("skipping {} event at tick {}: {}", event.tag(), event.tick(), err);
                    continue;
                }
            };

            let tick = event.tick();
            elapsed += ticks_to_millis(tick.saturating_sub(last_tick), mpq, resolution);
            last_tick = last_tick.max(tick);
            if let Some(tempo) = message.tempo() {
                mpq = tempo;
            }

            schedule.push(Scheduled {
                at: millis_to_dur(elapsed),
                tick: tick,
                message: message,
            });
        }

        Playback {
            schedule: schedule,
            position: 0,
            paused: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn schedule(&self) -> &[Scheduled] {
        &self.schedule
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.schedule.len()
    }

    pub fn duration(&self) -> Duration {
        match self.schedule.last() {
            Some(last) => last.at,
            None => Duration::new(0, 0),
        }
    }

    pub fn pause_handle(&self) -> PauseHandle {
        PauseHandle {
            flag: self.paused.clone(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Clear a pause, keeping the current position
    pub fn resume(&mut self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Rewind to the first message and clear any pause
    pub fn restart(&mut self) {
        self.position = 0;
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Send scheduled messages to `sink` from the current position until the
    /// end or a pause. A pause requested before the call sends nothing until
    /// `resume` or `restart`. With `realtime` the calling thread sleeps until
    /// each message is due. Returns how many messages were sent.
    pub fn run(&mut self, sink: &mut dyn Sink, realtime: bool) -> usize {
        let offset = match self.schedule.get(self.position) {
            Some(first) => first.at,
            None => return 0,
        };
        let started = Instant::now();
        let mut sent = 0;

        while let Some(item) = self.schedule.get(self.position) {
            if self.paused.load(Ordering::SeqCst) {
                debug!("paused at tick {}", item.tick);
                break;
            }

            if realtime {
                let due = item.at - offset;
                let now = started.elapsed();
                if due > now {
                    thread::sleep(due - now);
                }
            }

            sink.process(item.message);
            self.position += 1;
            sent += 1;
        }

        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::Memory;
    use crate::track::Event;

    fn timeline() -> Timeline {
        let mut timeline = Timeline::new(24);
        timeline.append(Event::TempoChange {
            micros_per_quarter: DEFAULT_MPQ,
            tick: 24,
        });
        timeline.emit_note(0, 9, 100, 4);
        timeline.append(Event::TempoChange {
            micros_per_quarter: 300_000,
            tick: 28,
        });
        timeline.emit_note(0, 10, 100, 4);
        timeline
    }

    #[test]
    fn test_conversions() {
        assert_eq!(millis_to_dur(1500.0), Duration::new(1, 500_000_000));
        assert_eq!(dur_to_millis(Duration::new(2, 250_000_000)), 2250.0);
        assert_eq!(ticks_to_millis(4, DEFAULT_MPQ, 4), 500.0);
    }

    #[test]
    fn test_schedule_follows_tempo() {
        let playback = Playback::new(&timeline(), 4);
        let at = playback
            .schedule()
            .iter()
            .map(|s| dur_to_millis(s.at))
            .collect::<Vec<_>>();
        assert_eq!(at, vec![3000.0, 3000.0, 3500.0, 3500.0, 3500.0, 3800.0]);
        assert_eq!(playback.duration(), Duration::from_millis(3800));
    }

    #[test]
    fn test_gap_uses_latest_tempo() {
        let mut timeline = timeline();
        timeline.append(Event::ProgramChange {
            channel: 3,
            instrument: 5,
            tick: 40,
        });
        let playback = Playback::new(&timeline, 4);
        let last = playback.schedule().last().unwrap();
        assert_eq!(last.tick, 40);
        assert_eq!(last.message, Message::Short(0xC3, 5, 0));
        assert_eq!(dur_to_millis(last.at), 4400.0);
    }

    #[test]
    fn test_run_and_restart() {
        let mut playback = Playback::new(&timeline(), 4);
        let mut sink = Memory::new();
        assert_eq!(playback.run(&mut sink, false), 6);
        assert!(playback.is_finished());
        assert_eq!(playback.run(&mut sink, false), 0);

        playback.restart();
        assert_eq!(playback.run(&mut sink, false), 6);
        let messages = sink.messages();
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[1], Message::Short(0x90, 9, 100));
    }

    struct PausingSink {
        handle: PauseHandle,
        seen: usize,
    }

    impl Sink for PausingSink {
        fn name(&self) -> &str {
            "pausing"
        }

        fn process(&mut self, _: Message) {
            self.seen += 1;
            if self.seen == 2 {
                self.handle.pause();
            }
        }
    }

    #[test]
    fn test_pause_resumes_in_place() {
        let mut playback = Playback::new(&timeline(), 4);
        let mut sink = PausingSink {
            handle: playback.pause_handle(),
            seen: 0,
        };
        assert_eq!(playback.run(&mut sink, false), 2);
        assert_eq!(playback.position(), 2);
        assert!(playback.is_paused());
        assert_eq!(playback.run(&mut sink, false), 0);

        playback.resume();
        assert_eq!(playback.run(&mut sink, false), 4);
        assert!(playback.is_finished());
    }

    #[test]
    fn test_pause_before_run_holds() {
        let mut playback = Playback::new(&timeline(), 4);
        let mut sink = Memory::new();
        playback.pause_handle().pause();
        assert_eq!(playback.run(&mut sink, false), 0);
        assert_eq!(playback.position(), 0);
        assert!(sink.messages().is_empty());

        playback.restart();
        assert!(!playback.is_paused());
        assert_eq!(playback.run(&mut sink, false), 6);
    }
}
