//! The Brokode wire notation.
//!
//! One source line becomes one envelope, `C(` + tokens joined by `.` + `)`.
//! A letter token is a numeric base code followed by optional tags
//! (`24km/hh`); digits use fixed tokens (`9a1`); `?` stands for anything
//! the alphabet cannot express.

pub mod envelope;
pub mod token;

pub use envelope::{interior, is_enveloped, wrap, CLOSE, OPEN, SEPARATOR};
pub use token::{split_token, CharCode};
