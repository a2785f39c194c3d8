//! Wire frames.

use crate::protocol::{END_MARKER, MAX_FRAME_SIZE, START_MARKER};
use crate::{Command, Error};
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A stack-allocated, serialized command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame(heapless::Vec<u8, MAX_FRAME_SIZE>);

impl Frame {
    /// Returns the serialized bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn buffer_overflow(size: usize) -> Error {
        Error::FrameTooLong {
            max: MAX_FRAME_SIZE,
            size,
        }
    }
}

impl TryFrom<&Command<'_>> for Frame {
    type Error = Error;

    fn try_from(command: &Command<'_>) -> Result<Self, Self::Error> {
        let size = command.frame_size();

        if size > MAX_FRAME_SIZE {
            return Err(Self::buffer_overflow(size));
        }

        let mut buffer = heapless::Vec::new();
        buffer
            .extend_from_slice(START_MARKER)
            .map_err(|()| Self::buffer_overflow(size))?;
        buffer
            .extend_from_slice(command.opcode().as_str().as_bytes())
            .map_err(|()| Self::buffer_overflow(size))?;
        buffer
            .extend_from_slice(command.argument().as_bytes())
            .map_err(|()| Self::buffer_overflow(size))?;
        buffer
            .push(END_MARKER)
            .map_err(|_| Self::buffer_overflow(size))?;
        Ok(Self(buffer))
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
