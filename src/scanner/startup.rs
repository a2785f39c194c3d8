//! Startup sequence.

use crate::{ByteChannel, Clock, Error, Scanner, Status};
use log::{debug, error, info, trace};

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Connects to the module and applies the startup [`Config`](crate::Config).
    ///
    /// The sequence aborts at the first failing step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the module could not be found,
    /// or the error of the first failing startup command.
    pub fn try_initialize(&mut self) -> Result<(), Error> {
        let result = self.startup();

        match &result {
            Ok(()) => self.set_status(Status::Connected),
            Err(_) => self.set_status(Status::Failed),
        }

        result
    }

    /// Connects to the module and applies the startup [`Config`](crate::Config).
    ///
    /// Returns `false` on the first failure.
    pub fn initialize(&mut self) -> bool {
        match self.try_initialize() {
            Ok(()) => {
                info!("Scanner online.");
                true
            }
            Err(error) => {
                error!("Scanner initialization failed: {error}");
                false
            }
        }
    }

    fn startup(&mut self) -> Result<(), Error> {
        if !self.establish()? {
            return Err(Error::Timeout);
        }

        self.discard_pending()?;
        let config = self.config;

        debug!("Setting illumination: {}", config.illumination);
        self.try_set_illumination(config.illumination)?
            .into_result()?;

        debug!("Enabling motion sense at sensitivity {}.", config.sensitivity);
        self.enable_motion_sense(config.sensitivity as u8)?
            .into_result()
    }

    /// Discards bytes that arrived before the startup sequence.
    fn discard_pending(&mut self) -> Result<(), Error> {
        while self.channel.is_readable()? {
            let byte = self.channel.read_byte()?;
            trace!("Discarding pending byte: {byte:#04X}");
        }

        Ok(())
    }
}
