//! Commands sent to the module.

use crate::protocol::{END_MARKER, START_MARKER};
use crate::{Error, Frame, Opcode};
use std::fmt::{Display, Formatter};

/// An opcode together with its argument.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Command<'a> {
    opcode: Opcode,
    argument: &'a str,
}

impl<'a> Command<'a> {
    /// Creates a new command.
    #[must_use]
    pub const fn new(opcode: Opcode, argument: &'a str) -> Self {
        Self { opcode, argument }
    }

    /// Returns the opcode.
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Returns the argument.
    #[must_use]
    pub const fn argument(&self) -> &'a str {
        self.argument
    }

    /// Returns the size of the serialized frame in bytes.
    #[must_use]
    pub const fn frame_size(&self) -> usize {
        START_MARKER.len() + self.opcode.as_str().len() + self.argument.len() + 1
    }

    /// Serializes the command into a [`Frame`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameTooLong`] if the command does not fit into a single frame.
    pub fn encode(&self) -> Result<Frame, Error> {
        Frame::try_from(self)
    }
}

impl Display for Command<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.opcode, self.argument)
    }
}

impl<'a> TryFrom<&'a [u8]> for Command<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let body = bytes
            .strip_prefix(START_MARKER)
            .ok_or(Error::MalformedFrame("missing start marker"))?
            .strip_suffix(&[END_MARKER])
            .ok_or(Error::MalformedFrame("missing end marker"))?;
        let body =
            std::str::from_utf8(body).map_err(|_| Error::MalformedFrame("body is not UTF-8"))?;
        let (opcode, argument) =
            Opcode::split_prefix(body).ok_or(Error::MalformedFrame("unknown opcode"))?;
        Ok(Self::new(opcode, argument))
    }
}
