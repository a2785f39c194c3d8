use crate::BaudRate;

/// What is known about the connection to the module.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConnectionState {
    baud_rate: BaudRate,
    established: bool,
}

impl ConnectionState {
    /// Creates a new, not yet established, state assuming the given bit rate.
    #[must_use]
    pub const fn new(baud_rate: BaudRate) -> Self {
        Self {
            baud_rate,
            established: false,
        }
    }

    /// Returns the bit rate the channel is operated at.
    ///
    /// Before the first [`Scanner::establish()`](crate::Scanner::establish) this is only assumed.
    #[must_use]
    pub const fn baud_rate(&self) -> BaudRate {
        self.baud_rate
    }

    /// Returns whether the module answered at the current bit rate.
    #[must_use]
    pub const fn is_established(&self) -> bool {
        self.established
    }

    pub(in crate::scanner) fn set_baud_rate(&mut self, baud_rate: BaudRate) {
        self.baud_rate = baud_rate;
    }

    pub(in crate::scanner) fn set_established(&mut self, established: bool) {
        self.established = established;
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::new(BaudRate::LOW)
    }
}
