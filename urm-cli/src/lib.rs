//! URM interpreter front end
//!
//! [`driver`] runs the parse and execution phases and classifies their
//! outcome; [`report`] renders listings, register dumps and diagnostics for
//! the console.

pub mod driver;
pub mod report;

pub use driver::{interpret, load, run, InterpretError};
