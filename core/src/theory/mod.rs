pub mod note;
pub mod scale;

pub use self::note::Note;
pub use self::scale::{NoteSet, ScaleKind};

use failure::Fail;

#[derive(Debug, Fail)]
pub enum TheoryError {
  #[fail(display = "Unknown note name: {}", name)]
  UnknownNote { name: String },

  #[fail(display = "Unknown scale kind: {}", name)]
  UnknownScaleKind { name: String },
}
