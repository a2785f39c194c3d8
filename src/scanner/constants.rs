use std::time::Duration;

/// Interval between two polls of the channel while waiting for a response.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Timeout of property writes.
pub const T_PROPERTY: Duration = Duration::from_millis(3000);

/// Timeout of the firmware version query.
///
/// The module typically takes about 430 ms to answer it.
pub const T_VERSION: Duration = Duration::from_millis(800);

/// Timeout of the bit rate change issued while probing.
pub const T_BAUD_RATE_CHANGE: Duration = Duration::from_millis(500);

/// Time for the line to settle after reconfiguring the channel's bit rate.
pub const T_BAUD_RATE_SETTLE: Duration = Duration::from_millis(10);
