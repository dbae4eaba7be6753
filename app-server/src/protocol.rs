use serde_derive::{Deserialize, Serialize};

use serde_json;

use fretwork_core::instrument::Instrument;
use fretwork_core::theory::{Note, ScaleKind};

/// A client request. Keys, notes and instruments arrive as opaque name
/// tokens so that a bad token turns into a failure response rather than a
/// decoding error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
  Setup,
  SetInstrument { instrument: String },
  ScaleNotes { key: String, scale: String },
  SetString { string: usize, note: String },
  AddString,
  Fretboard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretCell {
  pub note: Note,
  pub in_scale: bool,
  pub root: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
  Setup {
    success: bool,
    instrument: Instrument,
    string_count: usize,
    tuning: Vec<Note>,
  },
  ScaleNotes {
    success: bool,
    root: Note,
    notes: Vec<Note>,
  },
  StringSet {
    success: bool,
    string: usize,
    note: Note,
  },
  StringAdded {
    success: bool,
    note: Note,
  },
  Fretboard {
    success: bool,
    key: Note,
    scale: ScaleKind,
    strings: Vec<Vec<FretCell>>,
  },
  Failure {
    success: bool,
    message: String,
  },
}

impl Response {
  pub fn failure<T>(message: T) -> Response
  where
    T: Into<String>,
  {
    Response::Failure {
      success: false,
      message: message.into(),
    }
  }
}

pub fn decode_request(data: &str) -> Result<Request, serde_json::Error> {
  serde_json::from_str(data)
}

pub fn encode_response(response: &Response) -> Result<String, serde_json::Error> {
  serde_json::to_string(response)
}
