use std::fmt::{Display, Formatter};

/// Errors that can occur while talking to the scanner module.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The module did not acknowledge or refuse a command before the deadline.
    Timeout,
    /// The module explicitly refused a command.
    Rejected,
    /// A capability argument is outside of its permitted domain.
    InvalidArgument {
        /// Name of the rejected argument.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A command does not fit into a single frame.
    FrameTooLong {
        /// Maximum frame size in bytes.
        max: usize,
        /// Size the frame would have had.
        size: usize,
    },
    /// A byte sequence is not a valid command frame.
    MalformedFrame(&'static str),
    /// The underlying byte channel reported a fault.
    ChannelUnavailable(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "Module did not respond in time."),
            Self::Rejected => write!(f, "Module rejected the command."),
            Self::InvalidArgument { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
            Self::FrameTooLong { max, size } => {
                write!(f, "Frame too long: {size} > {max}")
            }
            Self::MalformedFrame(reason) => write!(f, "Malformed frame: {reason}"),
            Self::ChannelUnavailable(error) => write!(f, "Byte channel unavailable: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ChannelUnavailable(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::ChannelUnavailable(error)
    }
}
