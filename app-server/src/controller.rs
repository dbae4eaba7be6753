use std::thread;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};
use failure::Fail;
use log::{info, warn};

use fretwork_core::instrument::Instrument;
use fretwork_core::session::Session;
use fretwork_core::theory::{Note, ScaleKind};

use crate::protocol;
use crate::protocol::{FretCell, Request, Response};
use crate::server::Message as ServerMessage;

#[derive(Debug, Fail)]
pub enum ControllerError {
  #[fail(display = "Failed to create the Controller thread: {}", cause)]
  Start { cause: String },

  #[fail(display = "Failed to join the Controller thread")]
  Stop,
}

/// The only execution context that touches the session. Requests are
/// handled to completion in arrival order.
struct ControllerThread {
  session: Session,
  server_tx: Sender<ServerMessage>,
}

impl ControllerThread {
  fn new(session: Session, server_tx: Sender<ServerMessage>) -> ControllerThread {
    ControllerThread { session, server_tx }
  }

  fn handle_messages(&mut self, server_rx: Receiver<ServerMessage>) {
    for msg in server_rx.iter() {
      match msg {
        ServerMessage::Incoming { port, data } => self.handle_request(port, data),
        ServerMessage::Stop => break,
        _ => {}
      }
    }
  }

  fn handle_request(&mut self, port: u16, data: String) {
    let response = match protocol::decode_request(data.as_str()) {
      Ok(request) => self.dispatch(request),
      Err(err) => {
        warn!("Undecodable request from port {}: {}", port, err);
        Response::failure(format!("Malformed request: {}", err))
      }
    };

    match protocol::encode_response(&response) {
      Ok(data) => drop(self.server_tx.send(ServerMessage::Outgoing { port, data })),
      Err(err) => warn!("Failed to encode a response for port {}: {}", port, err),
    }
  }

  fn dispatch(&mut self, request: Request) -> Response {
    match request {
      Request::Setup => self.setup(),
      Request::SetInstrument { instrument } => self.set_instrument(instrument),
      Request::ScaleNotes { key, scale } => self.scale_notes(key, scale),
      Request::SetString { string, note } => self.set_string(string, note),
      Request::AddString => self.add_string(),
      Request::Fretboard => self.fretboard(),
    }
  }

  fn setup(&self) -> Response {
    let tuning = self.session.get_tuning();
    Response::Setup {
      success: true,
      instrument: self.session.get_instrument(),
      string_count: tuning.len(),
      tuning: tuning.notes().to_vec(),
    }
  }

  fn set_instrument(&mut self, name: String) -> Response {
    match Instrument::from_name(name.as_str()) {
      Ok(instrument) => {
        self.session.set_instrument(instrument);
        self.setup()
      }
      Err(err) => Response::failure(err.to_string()),
    }
  }

  fn scale_notes(&mut self, key: String, scale: String) -> Response {
    let selection = Note::from_name(key.as_str())
      .map_err(|err| err.to_string())
      .and_then(|root| {
        ScaleKind::from_name(scale.as_str())
          .map(|kind| (root, kind))
          .map_err(|err| err.to_string())
      });

    match selection {
      Ok((root, kind)) => {
        self.session.set_scale(root, kind);
        Response::ScaleNotes {
          success: true,
          root,
          notes: self.session.get_scale_notes().to_vec(),
        }
      }
      Err(message) => Response::failure(message),
    }
  }

  fn set_string(&mut self, string: usize, note: String) -> Response {
    let result = Note::from_name(note.as_str())
      .map_err(|err| err.to_string())
      .and_then(|note| {
        self
          .session
          .set_string_note(string, note)
          .map(|()| note)
          .map_err(|err| err.to_string())
      });

    match result {
      Ok(note) => Response::StringSet {
        success: true,
        string,
        note,
      },
      Err(message) => Response::failure(message),
    }
  }

  fn add_string(&mut self) -> Response {
    let note = self.session.add_string();
    Response::StringAdded {
      success: true,
      note,
    }
  }

  fn fretboard(&self) -> Response {
    let grid = self.session.grid();
    let strings = grid
      .strings()
      .iter()
      .map(|string| {
        string
          .iter()
          .map(|state| FretCell {
            note: state.get_note(),
            in_scale: state.is_in_scale(),
            root: state.is_root(),
          })
          .collect()
      })
      .collect();

    Response::Fretboard {
      success: true,
      key: self.session.get_key(),
      scale: self.session.get_scale(),
      strings,
    }
  }
}

pub struct Controller {
  handler: JoinHandle<()>,
}

impl Controller {
  pub fn new(
    session: Session,
    server_rx: Receiver<ServerMessage>,
    server_tx: Sender<ServerMessage>,
  ) -> Result<Controller, ControllerError> {
    info!("Starting Controller ...");

    thread::Builder::new()
      .name("controller".into())
      .spawn(move || ControllerThread::new(session, server_tx).handle_messages(server_rx))
      .map_err(|err| ControllerError::Start {
        cause: err.to_string(),
      })
      .map(|handler| Controller { handler })
  }

  pub fn wait(self) -> Result<(), ControllerError> {
    self.handler.join().map_err(|_| ControllerError::Stop)
  }
}
