use std::collections::HashMap;
use std::sync::OnceLock;

/// Behaviours a character can be bound to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    NewNote,
    DoubleVolume,
    IncreaseOctave,
    DecreaseOctave,
    RepeatNote,
    RandomNote,
    NewInstrument,
    Rest,
}

/// An action together with the arguments it was bound with. Replaying a
/// binding ignores whatever character triggered the replay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub kind: ActionKind,
    pub character: char,
    pub previous_character: char,
    pub previous_pitch: Option<u8>,
}

type Table = HashMap<char, ActionKind>;

fn notes(actions: &mut Table) {
    for c in "ABCDEFGHabcdefgh".chars() {
        actions.insert(c, ActionKind::NewNote);
    }
}

fn repeats(actions: &mut Table) {
    for c in "OoIiUu".chars() {
        actions.insert(c, ActionKind::RepeatNote);
    }
}

fn controls(actions: &mut Table) {
    actions.insert(' ', ActionKind::DoubleVolume);
    actions.insert('+', ActionKind::IncreaseOctave);
    actions.insert('-', ActionKind::DecreaseOctave);
    actions.insert('?', ActionKind::RandomNote);
    actions.insert('\n', ActionKind::NewInstrument);
    actions.insert(';', ActionKind::Rest);
}

pub fn all() -> Table {
    let mut actions = HashMap::new();
    notes(&mut actions);
    repeats(&mut actions);
    controls(&mut actions);
    actions
}

static ACTIONS: OnceLock<Table> = OnceLock::new();

pub fn lookup(character: char) -> Option<ActionKind> {
    ACTIONS.get_or_init(all).get(&character).cloned()
}
