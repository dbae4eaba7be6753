use log::{debug, info};

use failure::{Error, Fail};

use fretwork_core::session::Session;

mod config;
use crate::config::Config;

mod controller;
use crate::controller::Controller;

mod protocol;

mod server;
use crate::server::Server;

const FRETWORK_CONFIG: &'static str = "FRETWORK_CONFIG";
const DEFAULT_FRETWORK_CONFIG: &'static str = "fretwork.toml";

const FRETWORK_LOG_CONFIG: &'static str = "FRETWORK_LOG_CONFIG";
const DEFAULT_FRETWORK_LOG_CONFIG: &'static str = "log4rs.yaml";

#[derive(Debug, Fail)]
enum MainError {
  #[fail(display = "Failed to init logging: {}", cause)]
  LoggingInit { cause: String },
}

fn main() -> Result<(), Error> {
  init_logging()?;

  let config = init_config()?;

  let session = init_session(&config);

  let server = init_server(config.websocket.port)?;

  let controller = Controller::new(session, server.receiver(), server.sender())?;

  controller.wait()?;

  server.close();

  Ok(())
}

fn init_logging() -> Result<(), Error> {
  let log_config_path = std::env::var(FRETWORK_LOG_CONFIG)
    .unwrap_or_else(|_| DEFAULT_FRETWORK_LOG_CONFIG.to_string());

  log4rs::init_file(log_config_path.as_str(), Default::default()).map_err(|err| {
    MainError::LoggingInit {
      cause: err.to_string(),
    }
  })?;

  Ok(())
}

fn init_config() -> Result<Config, Error> {
  let config_path =
    std::env::var(FRETWORK_CONFIG).unwrap_or_else(|_| DEFAULT_FRETWORK_CONFIG.to_string());

  info!("Loading the configuration from {} ...", config_path);
  let config = Config::from_file(config_path.as_str())?;
  debug!("{:#?}", config);

  Ok(config)
}

fn init_session(config: &Config) -> Session {
  info!("Initialising the session ...");

  let session = Session::new(config.fretboard.clone());
  info!(
    "Session {:?} tuned for the {}",
    session.get_id(),
    session.get_instrument()
  );

  session
}

fn init_server(port: u16) -> Result<Server, Error> {
  info!("Initialising the WebSocket server ...");

  Server::new(port)
}
