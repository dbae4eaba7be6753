use std::convert::TryFrom;
use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::theory::TheoryError;

pub const NUM_NOTES: usize = 12;

const NOTE_NAMES: [&str; NUM_NOTES] = [
  "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class on the chromatic circle. No octave information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note(u8);

impl Note {
  pub const C: Note = Note(0);
  pub const C_SHARP: Note = Note(1);
  pub const D: Note = Note(2);
  pub const D_SHARP: Note = Note(3);
  pub const E: Note = Note(4);
  pub const F: Note = Note(5);
  pub const F_SHARP: Note = Note(6);
  pub const G: Note = Note(7);
  pub const G_SHARP: Note = Note(8);
  pub const A: Note = Note(9);
  pub const A_SHARP: Note = Note(10);
  pub const B: Note = Note(11);

  pub const ALL: [Note; NUM_NOTES] = [
    Note::C,
    Note::C_SHARP,
    Note::D,
    Note::D_SHARP,
    Note::E,
    Note::F,
    Note::F_SHARP,
    Note::G,
    Note::G_SHARP,
    Note::A,
    Note::A_SHARP,
    Note::B,
  ];

  pub fn new(index: usize) -> Note {
    Note((index % NUM_NOTES) as u8)
  }

  pub fn from_name(name: &str) -> Result<Note, TheoryError> {
    NOTE_NAMES
      .iter()
      .position(|candidate| *candidate == name)
      .map(Note::new)
      .ok_or_else(|| TheoryError::UnknownNote {
        name: name.to_string(),
      })
  }

  pub fn get_index(&self) -> usize {
    self.0 as usize
  }

  pub fn get_name(&self) -> &'static str {
    NOTE_NAMES[self.0 as usize]
  }

  /// The pitch class sounding at `fret` on a string whose open note is `self`.
  /// Fret distance is semitone distance, wrapping around the octave.
  pub fn at_fret(self, fret: usize) -> Note {
    Note::new(self.0 as usize + fret)
  }
}

impl fmt::Display for Note {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.get_name())
  }
}

impl TryFrom<String> for Note {
  type Error = TheoryError;

  fn try_from(name: String) -> Result<Note, TheoryError> {
    Note::from_name(name.as_str())
  }
}

impl From<Note> for String {
  fn from(note: Note) -> String {
    note.get_name().to_string()
  }
}
