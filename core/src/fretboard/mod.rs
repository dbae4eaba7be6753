pub mod grid;
pub mod tuning;

pub use self::grid::{FretGrid, FretState};
pub use self::tuning::Tuning;

use failure::Fail;

#[derive(Debug, Fail)]
pub enum FretboardError {
  #[fail(display = "String {} out of range for a {} string tuning", index, len)]
  StringOutOfRange { index: usize, len: usize },
}
