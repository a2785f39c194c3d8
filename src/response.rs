use crate::Error;
use std::fmt::{Display, Formatter};

/// Classified reply of the module to a single command.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Response {
    /// The module acknowledged the command.
    Acknowledged,
    /// The module is present and refused the command.
    Rejected,
    /// Neither sentinel arrived before the deadline.
    TimedOut,
}

impl Response {
    /// Returns `true` if the module acknowledged the command.
    #[must_use]
    pub const fn is_acknowledged(self) -> bool {
        matches!(self, Self::Acknowledged)
    }

    /// Converts the response into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rejected`] or [`Error::Timeout`] respectively if the command was not acknowledged.
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Acknowledged => Ok(()),
            Self::Rejected => Err(Error::Rejected),
            Self::TimedOut => Err(Error::Timeout),
        }
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acknowledged => write!(f, "ACK"),
            Self::Rejected => write!(f, "NAK"),
            Self::TimedOut => write!(f, "timeout"),
        }
    }
}
