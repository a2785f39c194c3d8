//! Reading barcode records.

use crate::{ByteChannel, Clock, Error, ScanBuffer, Scanner};
use log::{debug, error, trace, warn};

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Polls the channel once for barcode bytes without blocking.
    ///
    /// Returns `true` if a record was completed, i.e. [`ScanBuffer::record()`] returns `Some`.
    /// An incomplete record stays in the buffer and is resumed by the next call,
    /// subject to the buffer's [`StaleTerminatorPolicy`](crate::StaleTerminatorPolicy).
    /// A record longer than the buffer's capacity is dropped up to its terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelUnavailable`] if the channel fails.
    pub fn try_read_barcode<const N: usize>(
        &mut self,
        buffer: &mut ScanBuffer<N>,
    ) -> Result<bool, Error> {
        if !self.channel.is_readable()? {
            return Ok(false);
        }

        buffer.begin_cycle();

        while !buffer.is_full() {
            if !self.channel.is_readable()? {
                trace!("Partial record: {:#04X?}", buffer.as_slice());
                return Ok(false);
            }

            if buffer.push(self.channel.read_byte()?) {
                debug!("Received record: {:?}", String::from_utf8_lossy(buffer.as_slice()));
                return Ok(true);
            }
        }

        warn!("Scan buffer full without record terminator.");
        Ok(false)
    }

    /// Polls the channel once for barcode bytes without blocking.
    ///
    /// Like [`try_read_barcode()`](Self::try_read_barcode), but treats channel faults as "no data yet".
    pub fn read_barcode<const N: usize>(&mut self, buffer: &mut ScanBuffer<N>) -> bool {
        self.try_read_barcode(buffer).unwrap_or_else(|error| {
            error!("Failed to read barcode: {error}");
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::simulation::Simulation;
    use crate::{ScanBuffer, StaleTerminatorPolicy};
    use std::time::Duration;

    #[test]
    fn test_record_across_polls() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<40>::new();

        for byte in b"H123" {
            simulation.feed(&[*byte]);
            assert!(!scanner.read_barcode(&mut buffer));
        }

        simulation.feed(b"\r");
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"H123\r".as_slice()));
        assert_eq!(&buffer.as_raw()[..6], b"H123\r\0");

        let before = buffer.clone();
        assert!(!scanner.read_barcode(&mut buffer));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_no_bytes_is_no_progress() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<8>::new();

        simulation.reply_after(Duration::from_millis(1), b'A');
        assert!(!scanner.read_barcode(&mut buffer));
        assert!(buffer.is_empty());
        assert_eq!(simulation.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stops_at_terminator() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<40>::new();

        simulation.feed(b"ONE\rTWO\r");
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"ONE\r".as_slice()));
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"TWO\r".as_slice()));
    }

    #[test]
    fn test_stale_terminator_discards_partial_record() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<40>::new();

        simulation.feed(b"H12345\r");
        assert!(scanner.read_barcode(&mut buffer));
        simulation.feed(b"AB");
        assert!(!scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.as_slice(), b"AB");
        simulation.feed(b"C\r");
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"C\r".as_slice()));
    }

    #[test]
    fn test_completed_record_policy_resumes_partial_record() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer =
            ScanBuffer::<40>::with_policy(StaleTerminatorPolicy::DiscardCompletedRecord);

        simulation.feed(b"H12345\r");
        assert!(scanner.read_barcode(&mut buffer));
        simulation.feed(b"AB");
        assert!(!scanner.read_barcode(&mut buffer));
        simulation.feed(b"C\r");
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"ABC\r".as_slice()));
    }

    #[test]
    fn test_overlong_record_is_dropped() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<4>::new();

        simulation.feed(b"ABCDE\r");
        assert!(!scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.as_slice(), b"ABC");
        assert!(!scanner.read_barcode(&mut buffer));
        assert!(buffer.is_empty());
        assert!(!buffer.is_skipping());

        simulation.feed(b"FG\r");
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"FG\r".as_slice()));
    }

    #[test]
    fn test_overlong_record_followed_by_record() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<8>::new();

        simulation.feed(b"0123456789\rOK\r");
        assert!(!scanner.read_barcode(&mut buffer));
        assert!(scanner.read_barcode(&mut buffer));
        assert_eq!(buffer.record(), Some(b"OK\r".as_slice()));
    }

    #[test]
    fn test_channel_fault_is_no_data() {
        let simulation = Simulation::new();
        simulation.break_channel();
        let mut scanner = simulation.scanner();
        let mut buffer = ScanBuffer::<8>::new();

        assert!(!scanner.read_barcode(&mut buffer));
        assert!(scanner.try_read_barcode(&mut buffer).is_err());
    }
}
