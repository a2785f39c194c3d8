use crate::BaudRate;
use std::time::Duration;

#[cfg(windows)]
pub use serialport::COMPort as SerialPortImpl;

#[cfg(unix)]
pub use serialport::TTYPort as SerialPortImpl;

/// Timeout of blocking reads on the port.
///
/// Reads are only issued once a byte is known to be available.
const READ_TIMEOUT: Duration = Duration::from_millis(10);

/// Opens a serial port depending on the local operating system.
///
/// The port is configured as 8N1 without flow control, as expected by the module.
///
/// # Errors
/// For errors please refer to [`SerialPortImpl::open()`] and [`serialport::new()`]
pub fn open<'a>(
    path: impl Into<std::borrow::Cow<'a, str>>,
    baud_rate: BaudRate,
) -> serialport::Result<SerialPortImpl> {
    SerialPortImpl::open(
        &serialport::new(path, baud_rate.into())
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None)
            .timeout(READ_TIMEOUT),
    )
}
