use std::convert::TryFrom;
use std::fmt;

use failure::Fail;

use serde_derive::{Deserialize, Serialize};

use crate::fretboard::Tuning;
use crate::theory::Note;

#[derive(Debug, Fail)]
pub enum InstrumentError {
  #[fail(display = "Unknown instrument: {}", name)]
  Unknown { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Instrument {
  Guitar,
  Bass,
  Mandolin,
  Banjo,
}

impl Instrument {
  pub const ALL: [Instrument; 4] = [
    Instrument::Guitar,
    Instrument::Bass,
    Instrument::Mandolin,
    Instrument::Banjo,
  ];

  pub fn from_name(name: &str) -> Result<Instrument, InstrumentError> {
    match name {
      "guitar" => Ok(Instrument::Guitar),
      "bass" => Ok(Instrument::Bass),
      "mandolin" => Ok(Instrument::Mandolin),
      "banjo" => Ok(Instrument::Banjo),
      _ => Err(InstrumentError::Unknown {
        name: name.to_string(),
      }),
    }
  }

  pub fn get_name(&self) -> &'static str {
    match self {
      Instrument::Guitar => "guitar",
      Instrument::Bass => "bass",
      Instrument::Mandolin => "mandolin",
      Instrument::Banjo => "banjo",
    }
  }

  /// Open notes in display order, string 1 first.
  pub fn open_notes(&self) -> &'static [Note] {
    match self {
      Instrument::Guitar => &[Note::E, Note::B, Note::G, Note::D, Note::A, Note::E],
      Instrument::Bass => &[Note::G, Note::D, Note::A, Note::E],
      Instrument::Mandolin => &[Note::E, Note::A, Note::D, Note::G],
      Instrument::Banjo => &[Note::D, Note::B, Note::G, Note::D, Note::G],
    }
  }

  pub fn default_tuning(&self) -> Tuning {
    Tuning::new(self.open_notes().to_vec())
  }
}

impl fmt::Display for Instrument {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.get_name())
  }
}

impl TryFrom<String> for Instrument {
  type Error = InstrumentError;

  fn try_from(name: String) -> Result<Instrument, InstrumentError> {
    Instrument::from_name(name.as_str())
  }
}

impl From<Instrument> for String {
  fn from(instrument: Instrument) -> String {
    instrument.get_name().to_string()
  }
}
