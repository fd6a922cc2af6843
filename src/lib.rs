//! Serial link driver
//!
//! Opens one serial device, forwards everything it sends to a text sink and
//! writes a single control byte to it once per interval.

pub mod config;
pub mod error;
pub mod link;
pub mod port;
pub mod reader;
pub mod writer;

pub use config::{LinkConfig, CONTROL_BYTE, DEFAULT_BAUD_RATE, DEFAULT_DEVICE};
pub use error::{ConnectionError, DecodeError, Error, Result, Task};
