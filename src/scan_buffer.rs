//! Caller-owned storage for barcode records.

use crate::protocol::{CARRIAGE_RETURN, NUL};
use log::{trace, warn};

/// How a read cycle treats a record terminator left in the buffer by an earlier cycle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum StaleTerminatorPolicy {
    /// Discard the buffer if a carriage return is found anywhere in its storage.
    ///
    /// This also erases a partially received record whenever bytes of an older,
    /// longer record are still lying behind the logical end of the buffer.
    #[default]
    DiscardBuffer,
    /// Discard the buffer only if its logical contents are a completed record.
    ///
    /// Partially received records are always resumed.
    DiscardCompletedRecord,
}

/// A fixed-capacity buffer assembling one carriage-return terminated record.
///
/// One slot is reserved for the string terminator written after a completed record,
/// so a record holds at most `N - 1` bytes including its carriage return.
/// Longer records are dropped as a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
    policy: StaleTerminatorPolicy,
    skipping: bool,
}

impl<const N: usize> ScanBuffer<N> {
    const MIN_CAPACITY: () = assert!(N >= 2, "A scan buffer needs room for CR and NUL.");

    /// Creates an empty buffer using the default [`StaleTerminatorPolicy`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(StaleTerminatorPolicy::DiscardBuffer)
    }

    /// Creates an empty buffer using the given [`StaleTerminatorPolicy`].
    #[must_use]
    pub const fn with_policy(policy: StaleTerminatorPolicy) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_CAPACITY;

        Self {
            bytes: [NUL; N],
            len: 0,
            policy,
            skipping: false,
        }
    }

    /// Returns the logical contents of the buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the whole underlying storage.
    ///
    /// A completed record is followed by a NUL byte.
    #[must_use]
    pub const fn as_raw(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Returns the completed record, including its carriage return, if any.
    #[must_use]
    pub fn record(&self) -> Option<&[u8]> {
        self.is_complete().then(|| self.as_slice())
    }

    /// Returns whether the logical contents are a completed record.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.as_slice().last() == Some(&CARRIAGE_RETURN)
    }

    /// Returns the length of the logical contents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the logical contents are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum length of a record, including its carriage return.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Returns whether no further record byte fits into the buffer.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Returns the buffer's stale terminator policy.
    #[must_use]
    pub const fn policy(&self) -> StaleTerminatorPolicy {
        self.policy
    }

    /// Returns whether the remainder of an overlong record is being dropped.
    #[must_use]
    pub const fn is_skipping(&self) -> bool {
        self.skipping
    }

    /// Empties the buffer and wipes its storage.
    pub fn clear(&mut self) {
        self.bytes = [NUL; N];
        self.len = 0;
        self.skipping = false;
    }

    /// Prepares the buffer for a new read cycle.
    pub(crate) fn begin_cycle(&mut self) {
        let stale = match self.policy {
            StaleTerminatorPolicy::DiscardBuffer => self.bytes.contains(&CARRIAGE_RETURN),
            StaleTerminatorPolicy::DiscardCompletedRecord => self.is_complete(),
        };

        if stale {
            trace!("Discarding buffer due to stale record terminator.");
            self.reset();
        } else if self.is_full() {
            warn!("Discarding overlong record.");
            self.reset();
            self.skipping = true;
        }
    }

    /// Appends a byte to the logical contents.
    ///
    /// Returns `true` if the byte completed a record.
    /// While skipping, bytes up to and including the next carriage return are dropped.
    ///
    /// The caller must ensure that the buffer is not [full](Self::is_full).
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.skipping {
            if byte == CARRIAGE_RETURN {
                trace!("Dropped remainder of overlong record.");
                self.skipping = false;
            }

            return false;
        }

        self.bytes[self.len] = byte;
        self.len += 1;

        if byte == CARRIAGE_RETURN {
            self.bytes[self.len] = NUL;
            true
        } else {
            false
        }
    }

    /// Sets the logical length to zero, leaving the storage in place.
    fn reset(&mut self) {
        self.bytes[0] = NUL;
        self.len = 0;
    }
}

impl<const N: usize> Default for ScanBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
