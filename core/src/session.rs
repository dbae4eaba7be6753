use log::debug;

use uuid::Uuid;

use crate::config::Config;
use crate::fretboard::{FretGrid, FretboardError, Tuning};
use crate::instrument::Instrument;
use crate::theory::{Note, NoteSet, ScaleKind};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SessionId(Uuid);

impl SessionId {
  pub fn new() -> SessionId {
    SessionId(Uuid::new_v4())
  }
}

/// Owns the mutable state behind one fretboard page: the tuning and the
/// current scale selection. The grid is derived state and is recomputed
/// from scratch on every query.
pub struct Session {
  id: SessionId,
  config: Config,
  instrument: Instrument,
  tuning: Tuning,
  key: Note,
  scale: ScaleKind,
  scale_notes: NoteSet,
}

impl Session {
  pub fn new(config: Config) -> Session {
    let instrument = config.instrument;
    let tuning = instrument.default_tuning();
    let key = Note::C;
    let scale = ScaleKind::Major;
    let scale_notes = scale.notes_in_key(key);

    Session {
      id: SessionId::new(),
      config,
      instrument,
      tuning,
      key,
      scale,
      scale_notes,
    }
  }

  pub fn get_id(&self) -> SessionId {
    self.id
  }

  pub fn get_instrument(&self) -> Instrument {
    self.instrument
  }

  pub fn get_tuning(&self) -> &Tuning {
    &self.tuning
  }

  pub fn get_key(&self) -> Note {
    self.key
  }

  pub fn get_scale(&self) -> ScaleKind {
    self.scale
  }

  pub fn get_scale_notes(&self) -> &NoteSet {
    &self.scale_notes
  }

  pub fn set_instrument(&mut self, instrument: Instrument) {
    debug!("Instrument changed to {}", instrument);
    self.instrument = instrument;
    self.tuning = instrument.default_tuning();
  }

  pub fn set_scale(&mut self, key: Note, scale: ScaleKind) {
    debug!("Scale changed to {} {}", key, scale.get_name());
    self.key = key;
    self.scale = scale;
    self.scale_notes = scale.notes_in_key(key);
  }

  pub fn set_string_note(&mut self, string: usize, note: Note) -> Result<(), FretboardError> {
    self.tuning.set_note(string, note)
  }

  /// Appends a string tuned to the configured default note and returns the
  /// note so that callers can report it. The session is the single source
  /// of truth for the append default.
  pub fn add_string(&mut self) -> Note {
    let note = self.config.new_string_note;
    self.tuning.append(note);
    note
  }

  pub fn grid(&self) -> FretGrid {
    FretGrid::compute(&self.tuning, &self.scale_notes, self.key, self.config.frets)
  }
}

#[cfg(test)]
mod test {

  use super::{Note, ScaleKind, Session, SessionId};
  use crate::config::Config;
  use crate::instrument::Instrument;

  #[test]
  pub fn new_uses_the_configured_instrument() {
    let session = Session::new(Config::default());

    assert_eq!(session.get_instrument(), Instrument::Guitar);
    assert_eq!(session.get_tuning().len(), 6);
    assert_eq!(session.get_key(), Note::C);
    assert_eq!(session.get_scale(), ScaleKind::Major);
  }

  #[test]
  pub fn session_ids_are_unique() {
    assert_ne!(SessionId::new(), SessionId::new());
  }

  #[test]
  pub fn set_scale_recomputes_the_note_set() {
    let mut session = Session::new(Config::default());
    session.set_scale(Note::A, ScaleKind::Minor);

    assert!(session.get_scale_notes().contains(Note::A));
    assert!(session.get_scale_notes().contains(Note::C));
    assert!(!session.get_scale_notes().contains(Note::C_SHARP));
  }

  #[test]
  pub fn add_string_returns_the_configured_default() {
    let mut session = Session::new(Config::default());
    let before = session.get_tuning().len();

    let note = session.add_string();

    assert_eq!(note, Note::C);
    assert_eq!(session.get_tuning().len(), before + 1);
    assert_eq!(session.get_tuning().get_note(before), Some(Note::C));
  }

  #[test]
  pub fn set_string_note_out_of_range_leaves_the_tuning_unchanged() {
    let mut session = Session::new(Config::default());
    let before = session.get_tuning().clone();

    let result = session.set_string_note(99, Note::C);

    assert!(result.is_err());
    assert_eq!(*session.get_tuning(), before);
  }

  #[test]
  pub fn set_instrument_resets_the_tuning() {
    let mut session = Session::new(Config::default());
    session.add_string();

    session.set_instrument(Instrument::Bass);

    assert_eq!(session.get_tuning().len(), 4);
    assert_eq!(session.get_tuning().get_note(0), Some(Note::G));
  }

  #[test]
  pub fn grid_follows_tuning_edits() {
    let mut session = Session::new(Config::default());
    session.set_scale(Note::C, ScaleKind::Major);

    session.set_string_note(0, Note::A).unwrap();
    let grid = session.grid();

    let open = grid.get_state(0, 0).unwrap();
    assert_eq!(open.get_note(), Note::A);
    assert!(open.is_in_scale());

    let third = grid.get_state(0, 3).unwrap();
    assert_eq!(third.get_note(), Note::C);
    assert!(third.is_root());
  }
}
