use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::fretboard::grid::DEFAULT_FRETS;
use crate::instrument::Instrument;
use crate::theory::Note;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
  pub instrument: Instrument,
  pub frets: usize,
  pub new_string_note: Note,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      instrument: Instrument::Guitar,
      frets: DEFAULT_FRETS,
      new_string_note: Note::C,
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

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}
