use std::convert::TryFrom;

use serde_derive::{Deserialize, Serialize};

use crate::theory::{Note, TheoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleKind {
  Major,
  Minor,
}

impl ScaleKind {
  pub const ALL: [ScaleKind; 2] = [ScaleKind::Major, ScaleKind::Minor];

  pub fn from_name(name: &str) -> Result<ScaleKind, TheoryError> {
    match name {
      "major" => Ok(ScaleKind::Major),
      "minor" => Ok(ScaleKind::Minor),
      _ => Err(TheoryError::UnknownScaleKind {
        name: name.to_string(),
      }),
    }
  }

  pub fn get_name(&self) -> &'static str {
    match self {
      ScaleKind::Major => "major",
      ScaleKind::Minor => "minor",
    }
  }

  /// Semitone offsets from the root.
  pub fn intervals(&self) -> &'static [usize] {
    match self {
      ScaleKind::Major => &[0, 2, 4, 5, 7, 9, 11],
      ScaleKind::Minor => &[0, 2, 3, 5, 7, 8, 10],
    }
  }

  pub fn notes_in_key(&self, key: Note) -> NoteSet {
    NoteSet::from_notes(self.intervals().iter().map(|semitones| key.at_fret(*semitones)))
  }
}

impl TryFrom<String> for ScaleKind {
  type Error = TheoryError;

  fn try_from(name: String) -> Result<ScaleKind, TheoryError> {
    ScaleKind::from_name(name.as_str())
  }
}

impl From<ScaleKind> for String {
  fn from(kind: ScaleKind) -> String {
    kind.get_name().to_string()
  }
}

/// A duplicate-free set of pitch classes, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSet {
  notes: Vec<Note>,
}

impl NoteSet {
  pub fn empty() -> NoteSet {
    NoteSet { notes: Vec::new() }
  }

  pub fn from_notes<I>(notes: I) -> NoteSet
  where
    I: IntoIterator<Item = Note>,
  {
    let mut set = NoteSet::empty();
    for note in notes {
      if !set.contains(note) {
        set.notes.push(note);
      }
    }
    set
  }

  pub fn contains(&self, note: Note) -> bool {
    self.notes.iter().any(|member| *member == note)
  }

  pub fn is_empty(&self) -> bool {
    self.notes.is_empty()
  }

  pub fn len(&self) -> usize {
    self.notes.len()
  }

  pub fn to_vec(&self) -> Vec<Note> {
    self.notes.clone()
  }
}

#[cfg(test)]
mod test {

  use super::{Note, NoteSet, ScaleKind};

  #[test]
  pub fn from_name() {
    for kind in ScaleKind::ALL.iter() {
      assert_eq!(ScaleKind::from_name(kind.get_name()).unwrap(), *kind);
    }
  }

  #[test]
  pub fn from_name_unknown() {
    assert!(ScaleKind::from_name("phrygian").is_err());
    assert!(ScaleKind::from_name("Major").is_err());
  }

  #[test]
  pub fn notes_in_key_c_major() {
    let notes = ScaleKind::Major.notes_in_key(Note::C);
    let expected = [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B];
    assert_eq!(notes.to_vec(), expected.to_vec());
  }

  #[test]
  pub fn notes_in_key_a_minor() {
    let notes = ScaleKind::Minor.notes_in_key(Note::A);
    let expected = [Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G];
    assert_eq!(notes.to_vec(), expected.to_vec());
  }

  #[test]
  pub fn notes_in_key_wraps_around() {
    let notes = ScaleKind::Major.notes_in_key(Note::B);
    assert!(notes.contains(Note::B));
    assert!(notes.contains(Note::C_SHARP));
    assert!(notes.contains(Note::A_SHARP));
    assert_eq!(notes.len(), 7);
  }

  #[test]
  pub fn note_set_deduplicates() {
    let set = NoteSet::from_notes(vec![Note::C, Note::E, Note::C, Note::G, Note::E]);
    assert_eq!(set.to_vec(), vec![Note::C, Note::E, Note::G]);
  }

  #[test]
  pub fn note_set_empty() {
    let set = NoteSet::empty();
    assert!(set.is_empty());
    assert!(!set.contains(Note::C));
  }
}
