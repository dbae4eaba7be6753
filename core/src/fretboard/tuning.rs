use crate::fretboard::FretboardError;
use crate::theory::Note;

/// The open note assigned to each string. Index 0 is string 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
  notes: Vec<Note>,
}

impl Tuning {
  pub fn new(notes: Vec<Note>) -> Tuning {
    Tuning { notes }
  }

  pub fn len(&self) -> usize {
    self.notes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.notes.is_empty()
  }

  pub fn get_note(&self, index: usize) -> Option<Note> {
    self.notes.get(index).cloned()
  }

  pub fn set_note(&mut self, index: usize, note: Note) -> Result<(), FretboardError> {
    if index < self.notes.len() {
      self.notes[index] = note;
      Ok(())
    } else {
      Err(FretboardError::StringOutOfRange {
        index,
        len: self.notes.len(),
      })
    }
  }

  pub fn append(&mut self, note: Note) {
    self.notes.push(note);
  }

  pub fn notes(&self) -> &[Note] {
    &self.notes
  }
}

#[cfg(test)]
mod test {

  use super::{Note, Tuning};

  fn standard() -> Tuning {
    Tuning::new(vec![Note::E, Note::A, Note::D, Note::G, Note::B, Note::E])
  }

  #[test]
  pub fn append_grows_by_one_and_preserves_order() {
    let mut tuning = standard();
    let before = tuning.notes().to_vec();

    tuning.append(Note::C);

    assert_eq!(tuning.len(), before.len() + 1);
    assert_eq!(&tuning.notes()[..before.len()], before.as_slice());
    assert_eq!(tuning.get_note(before.len()), Some(Note::C));
  }

  #[test]
  pub fn set_note() {
    let mut tuning = standard();
    tuning.set_note(1, Note::D).unwrap();
    assert_eq!(tuning.get_note(1), Some(Note::D));
    assert_eq!(tuning.get_note(0), Some(Note::E));
  }

  #[test]
  pub fn set_note_out_of_range() {
    let mut tuning = standard();
    let before = tuning.clone();

    let result = tuning.set_note(99, Note::C);

    assert!(result.is_err());
    assert_eq!(tuning, before);
  }
}
