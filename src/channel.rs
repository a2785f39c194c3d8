//! Byte-oriented access to the serial line.

use crate::serial_port::SerialPortImpl;
use crate::BaudRate;
use serialport::SerialPort;
use std::io::{Read, Write};

/// A half-duplex byte channel with a configurable bit rate.
///
/// All methods must return promptly. In particular,
/// [`is_readable()`](Self::is_readable) must never wait for data.
pub trait ByteChannel {
    /// Returns whether at least one byte can be read without blocking.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the channel is faulty.
    fn is_readable(&mut self) -> std::io::Result<bool>;

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if no byte could be read.
    fn read_byte(&mut self) -> std::io::Result<u8>;

    /// Writes all given bytes to the channel.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the bytes could not be written.
    fn write_all(&mut self, bytes: &[u8]) -> std::io::Result<()>;

    /// Reconfigures the channel's bit rate.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the bit rate could not be set.
    fn set_baud_rate(&mut self, baud_rate: BaudRate) -> std::io::Result<()>;
}

impl ByteChannel for SerialPortImpl {
    fn is_readable(&mut self) -> std::io::Result<bool> {
        Ok(self.bytes_to_read()? > 0)
    }

    fn read_byte(&mut self) -> std::io::Result<u8> {
        let mut byte = [0];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn write_all(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        Write::write_all(self, bytes)?;
        self.flush()
    }

    fn set_baud_rate(&mut self, baud_rate: BaudRate) -> std::io::Result<()> {
        SerialPort::set_baud_rate(self, baud_rate.into()).map_err(Into::into)
    }
}
