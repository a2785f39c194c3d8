//! Establish a connection with the module.

use crate::scanner::constants::{T_BAUD_RATE_CHANGE, T_BAUD_RATE_SETTLE};
use crate::{BaudRate, ByteChannel, Clock, Error, Opcode, Scanner};
use log::{debug, info, warn};

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Establishes communication with the module at [`BaudRate::LOW`].
    ///
    /// The module is first queried at [`BaudRate::LOW`].
    /// If it does not answer, it is told to switch to [`BaudRate::LOW`] at [`BaudRate::HIGH`]
    /// and queried once more. There are no further attempts.
    ///
    /// Returns `true` if the module answered.
    /// Returns `true` right away if already established at [`BaudRate::LOW`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelUnavailable`] if the channel fails.
    pub fn establish(&mut self) -> Result<bool, Error> {
        if self.connection.is_established() && self.connection.baud_rate() == BaudRate::LOW {
            debug!("Connection already established.");
            return Ok(true);
        }

        debug!("Probing module at {}...", BaudRate::LOW);
        self.switch_baud_rate(BaudRate::LOW)?;

        if self.query_version()?.is_acknowledged() {
            return Ok(self.established());
        }

        info!(
            "Module did not respond at {}. Reconfiguring it at {}.",
            BaudRate::LOW,
            BaudRate::HIGH
        );
        self.switch_baud_rate(BaudRate::HIGH)?;
        self.clock.sleep(T_BAUD_RATE_SETTLE);
        let response = self.send(
            Opcode::BaudRate,
            BaudRate::LOW.argument(),
            T_BAUD_RATE_CHANGE,
        )?;
        debug!("Bit rate change yielded: {response}");
        self.switch_baud_rate(BaudRate::LOW)?;

        if self.query_version()?.is_acknowledged() {
            return Ok(self.established());
        }

        warn!("Module did not respond at either bit rate.");
        Ok(false)
    }

    /// Reconfigures the channel and records the new bit rate.
    pub(in crate::scanner) fn switch_baud_rate(&mut self, baud_rate: BaudRate) -> Result<(), Error> {
        self.channel.set_baud_rate(baud_rate)?;
        self.connection.set_baud_rate(baud_rate);
        Ok(())
    }

    fn established(&mut self) -> bool {
        self.connection.set_established(true);
        info!(
            "Connection established at {}.",
            self.connection.baud_rate()
        );
        true
    }
}
