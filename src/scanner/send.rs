//! Sending commands and awaiting the module's acknowledgement.

use crate::protocol::{ACK, NAK};
use crate::scanner::constants::POLL_INTERVAL;
use crate::{ByteChannel, Clock, Command, Error, Opcode, Response, Scanner};
use log::{debug, trace, warn};
use std::time::Duration;

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Sends a command and waits for the module to acknowledge or refuse it.
    ///
    /// The wait never exceeds `max_wait`.
    /// Bytes other than the acknowledgement sentinels are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameTooLong`] if the command does not fit into a frame,
    /// in which case nothing is written, or [`Error::ChannelUnavailable`] on I/O errors.
    pub fn send_and_wait(
        &mut self,
        command: &Command<'_>,
        max_wait: Duration,
    ) -> Result<Response, Error> {
        let frame = command.encode()?;
        debug!("Sending command: {command}");
        trace!("Frame bytes: {:#04X?}", frame.as_bytes());
        self.channel.write_all(&frame)?;
        let deadline = self.clock.now() + max_wait;

        loop {
            if let Some(response) = self.receive_response()? {
                match response {
                    Response::Rejected => warn!("Module rejected command: {command}"),
                    _ => debug!("Module acknowledged command: {command}"),
                }

                return Ok(response);
            }

            let now = self.clock.now();

            if now >= deadline {
                warn!("Module did not respond to {command} within {max_wait:?}.");
                return Ok(Response::TimedOut);
            }

            self.clock.sleep((deadline - now).min(POLL_INTERVAL));
        }
    }

    pub(in crate::scanner) fn send(
        &mut self,
        opcode: Opcode,
        argument: &str,
        max_wait: Duration,
    ) -> Result<Response, Error> {
        self.send_and_wait(&Command::new(opcode, argument), max_wait)
    }

    /// Drains all currently available bytes until a sentinel is found.
    fn receive_response(&mut self) -> Result<Option<Response>, Error> {
        while self.channel.is_readable()? {
            match self.channel.read_byte()? {
                ACK => return Ok(Some(Response::Acknowledged)),
                NAK => return Ok(Some(Response::Rejected)),
                byte => trace!("Discarding byte: {byte:#04X}"),
            }
        }

        Ok(None)
    }
}
