use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use fretwork_core::config::Config as FretboardConfig;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
  pub websocket: WebSocket,
  pub fretboard: FretboardConfig,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      websocket: WebSocket::default(),
      fretboard: FretboardConfig::default(),
    }
  }
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  #[allow(dead_code)]
  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WebSocket {
  pub port: u16,
}

impl Default for WebSocket {
  fn default() -> WebSocket {
    WebSocket { port: 3001 }
  }
}

#[cfg(test)]
mod test {

  use super::Config;
  use fretwork_core::instrument::Instrument;

  #[test]
  pub fn from_str() {
    let content = "[websocket]\nport = 4001\n\n[fretboard]\ninstrument = \"banjo\"\n";
    let config = Config::from_str(content).unwrap();

    assert_eq!(config.websocket.port, 4001);
    assert_eq!(config.fretboard.instrument, Instrument::Banjo);
    assert_eq!(config.fretboard.frets, 15);
  }

  #[test]
  pub fn from_str_defaults() {
    let config = Config::from_str("").unwrap();

    assert_eq!(config.websocket.port, 3001);
    assert_eq!(config.fretboard.instrument, Instrument::Guitar);
  }
}
