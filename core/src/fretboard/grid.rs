use crate::fretboard::Tuning;
use crate::theory::{Note, NoteSet};

/// Frets per string, the open string included.
pub const DEFAULT_FRETS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretState {
  note: Note,
  in_scale: bool,
  root: bool,
}

impl FretState {
  fn new(note: Note, scale_notes: &NoteSet, root: Note) -> FretState {
    let in_scale = scale_notes.contains(note);
    FretState {
      note,
      in_scale,
      root: in_scale && note == root,
    }
  }

  pub fn get_note(&self) -> Note {
    self.note
  }

  pub fn is_in_scale(&self) -> bool {
    self.in_scale
  }

  pub fn is_root(&self) -> bool {
    self.root
  }
}

/// The derived render state for every (string, fret) pair. Never stored
/// anywhere, always recomputed from the tuning and the scale selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FretGrid {
  strings: Vec<Vec<FretState>>,
}

impl FretGrid {
  pub fn compute(tuning: &Tuning, scale_notes: &NoteSet, root: Note, frets: usize) -> FretGrid {
    let strings = tuning
      .notes()
      .iter()
      .map(|open_note| {
        (0..frets)
          .map(|fret| FretState::new(open_note.at_fret(fret), scale_notes, root))
          .collect()
      })
      .collect();

    FretGrid { strings }
  }

  pub fn num_strings(&self) -> usize {
    self.strings.len()
  }

  pub fn get_state(&self, string: usize, fret: usize) -> Option<&FretState> {
    self.strings.get(string).and_then(|frets| frets.get(fret))
  }

  pub fn strings(&self) -> &[Vec<FretState>] {
    &self.strings
  }
}

#[cfg(test)]
mod test {

  use super::{FretGrid, Note, NoteSet, Tuning, DEFAULT_FRETS};
  use crate::theory::ScaleKind;

  fn standard() -> Tuning {
    Tuning::new(vec![Note::E, Note::A, Note::D, Note::G, Note::B, Note::E])
  }

  #[test]
  pub fn compute_dimensions() {
    let scale_notes = ScaleKind::Major.notes_in_key(Note::C);
    let grid = FretGrid::compute(&standard(), &scale_notes, Note::C, DEFAULT_FRETS);

    assert_eq!(grid.num_strings(), 6);
    for string in 0..grid.num_strings() {
      assert!(grid.get_state(string, DEFAULT_FRETS - 1).is_some());
      assert!(grid.get_state(string, DEFAULT_FRETS).is_none());
    }
  }

  #[test]
  pub fn compute_is_deterministic() {
    let scale_notes = ScaleKind::Minor.notes_in_key(Note::A);
    let first = FretGrid::compute(&standard(), &scale_notes, Note::A, DEFAULT_FRETS);
    let second = FretGrid::compute(&standard(), &scale_notes, Note::A, DEFAULT_FRETS);
    assert_eq!(first, second);
  }

  #[test]
  pub fn empty_scale_renders_nothing() {
    let grid = FretGrid::compute(&standard(), &NoteSet::empty(), Note::C, DEFAULT_FRETS);

    for string in grid.strings() {
      for state in string {
        assert!(!state.is_in_scale());
        assert!(!state.is_root());
      }
    }
  }

  #[test]
  pub fn root_outside_scale_marks_no_roots() {
    let scale_notes = NoteSet::from_notes(vec![Note::D, Note::E, Note::F]);
    let grid = FretGrid::compute(&standard(), &scale_notes, Note::C, DEFAULT_FRETS);

    for string in grid.strings() {
      for state in string {
        assert!(!state.is_root());
      }
    }
  }

  #[test]
  pub fn c_major_on_a_standard_guitar() {
    let scale_notes = ScaleKind::Major.notes_in_key(Note::C);
    let grid = FretGrid::compute(&standard(), &scale_notes, Note::C, DEFAULT_FRETS);

    // String 1 is the open E string. Fret 0 sounds E, in scale but no root.
    let open = grid.get_state(0, 0).unwrap();
    assert_eq!(open.get_note(), Note::E);
    assert!(open.is_in_scale());
    assert!(!open.is_root());

    // Fret 8 on the same string sounds C, the root.
    let eighth = grid.get_state(0, 8).unwrap();
    assert_eq!(eighth.get_note(), Note::C);
    assert!(eighth.is_in_scale());
    assert!(eighth.is_root());

    // Fret 1 sounds F, in scale; fret 2 sounds F#, not in scale.
    assert!(grid.get_state(0, 1).unwrap().is_in_scale());
    assert!(!grid.get_state(0, 2).unwrap().is_in_scale());
  }

  #[test]
  pub fn roots_imply_in_scale() {
    let scale_notes = ScaleKind::Minor.notes_in_key(Note::E);
    let grid = FretGrid::compute(&standard(), &scale_notes, Note::E, DEFAULT_FRETS);

    for string in grid.strings() {
      for state in string {
        if state.is_root() {
          assert!(state.is_in_scale());
          assert_eq!(state.get_note(), Note::E);
        }
      }
    }
  }
}
