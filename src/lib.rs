//! Driver for the DE2120 barcode scanner module.
//!
//! The module is attached via a serial line and controlled by a textual command protocol.
//! Every command is framed as `^_^<opcode><argument>.` and answered with a single
//! acknowledgement (`0x06`) or negative acknowledgement (`0x15`) byte.
//! Scanned barcodes are streamed as carriage-return terminated records.
//!
//! This library is free software and is not affiliated with the module's manufacturer.

pub use baud_rate::BaudRate;
pub use channel::ByteChannel;
pub use clock::{Clock, SystemClock};
pub use command::Command;
pub use config::Config;
pub use error::Error;
pub use frame::Frame;
pub use opcode::Opcode;
pub use properties::{
    BuzzerFrequency, CaseConversion, CommMode, ContinuousInterval, ReadingArea, ReadingMode,
    Sensitivity, SerialDataFormat, UsbDataFormat,
};
pub use response::Response;
pub use scan_buffer::{ScanBuffer, StaleTerminatorPolicy};
pub use scanner::{ConnectionState, Scanner};
pub use serial_port::{open, SerialPortImpl};
pub use status::{Status, StatusSink};

mod baud_rate;
mod channel;
mod clock;
mod command;
mod config;
mod error;
mod frame;
mod opcode;
mod properties;
mod protocol;
mod response;
mod scan_buffer;
mod scanner;
mod serial_port;
#[cfg(test)]
mod simulation;
mod status;
