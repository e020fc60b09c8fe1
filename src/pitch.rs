use rand::Rng;

/// Highest representable pitch; anything above clamps to it
pub const MAX_SEMITONE: u8 = 127;

/// Length in ticks shared by every note
pub const DEFAULT_DURATION: u64 = 4;

/// Pitch used where a note is needed but none has been read yet
pub const SENTINEL: u8 = 0;

const LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Note {
    pub semitone: u8,
    pub duration: u64,
}

impl Note {
    pub fn new(semitone: u8) -> Note {
        Note {
            semitone: semitone,
            duration: DEFAULT_DURATION,
        }
    }
}

pub fn is_note(character: char) -> bool {
    match character {
        'A'..='H' | 'a'..='h' => true,
        _ => false,
    }
}

/// Semitone offset of a diatonic letter, using German naming so `B` is the
/// flattened seventh and `H` the natural one.
fn semitone(letter: char) -> Option<u8> {
    let (c, d, e, f, g, a, b, h) = (0, 2, 4, 5, 7, 9, 10, 11);
    match letter.to_ascii_uppercase() {
        'A' => Some(a),
        'B' => Some(b),
        'C' => Some(c),
        'D' => Some(d),
        'E' => Some(e),
        'F' => Some(f),
        'G' => Some(g),
        'H' => Some(h),
        _ => None,
    }
}

pub fn resolve(letter: char) -> Option<Note> {
    if !is_note(letter) {
        return None;
    }
    semitone(letter).map(Note::new)
}

pub fn full_pitch(octave: i32, semitone: u8) -> u8 {
    let pitch = 12 * (octave + 1) + i32::from(semitone);
    if pitch > i32::from(MAX_SEMITONE) {
        MAX_SEMITONE
    } else if pitch < 0 {
        0
    } else {
        pitch as u8
    }
}

pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())]
}
