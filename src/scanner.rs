mod catalog;
mod connect;
mod constants;
mod read;
mod send;
mod startup;
mod state;

use std::fmt::{Debug, Formatter};

pub use state::ConnectionState;

use crate::{BaudRate, ByteChannel, Clock, Config, Status, StatusSink, SystemClock};

/// Driver of a DE2120 barcode scanner module.
///
/// The scanner exclusively owns its [`ByteChannel`].
/// It is meant to be driven from a single polling loop:
///
/// ```no_run
/// use de2120::{open, BaudRate, ScanBuffer, Scanner, SystemClock};
///
/// let serial_port = open("/dev/ttyUSB0", BaudRate::LOW).unwrap();
/// let mut scanner = Scanner::new(serial_port, SystemClock).assuming_baud_rate(BaudRate::LOW);
/// let mut buffer = ScanBuffer::<40>::new();
///
/// if scanner.initialize() {
///     loop {
///         if scanner.read_barcode(&mut buffer) {
///             println!("{}", String::from_utf8_lossy(buffer.as_slice()).trim_end());
///         }
///     }
/// }
/// ```
pub struct Scanner<C, K = SystemClock> {
    channel: C,
    clock: K,
    config: Config,
    connection: ConnectionState,
    status: Status,
    status_sink: Option<Box<dyn StatusSink>>,
}

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Creates a new scanner driver using the default [`Config`].
    #[must_use]
    pub fn new(channel: C, clock: K) -> Self {
        Self::with_config(channel, clock, Config::default())
    }

    /// Creates a new scanner driver using the given [`Config`].
    ///
    /// The channel is assumed to be operated at [`BaudRate::LOW`] until
    /// [`establish()`](Self::establish) probes it or
    /// [`assuming_baud_rate()`](Self::assuming_baud_rate) says otherwise.
    #[must_use]
    pub fn with_config(channel: C, clock: K, config: Config) -> Self {
        Self {
            channel,
            clock,
            config,
            connection: ConnectionState::default(),
            status: Status::Disconnected,
            status_sink: None,
        }
    }

    /// Sets the bit rate the channel was opened at.
    #[must_use]
    pub fn assuming_baud_rate(mut self, baud_rate: BaudRate) -> Self {
        self.connection = ConnectionState::new(baud_rate);
        self
    }

    /// Registers a sink to be notified about status transitions.
    #[must_use]
    pub fn with_status_sink<S>(mut self, sink: S) -> Self
    where
        S: StatusSink + 'static,
    {
        self.status_sink = Some(Box::new(sink));
        self
    }

    /// Returns the current connection state.
    pub const fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// Returns the current status.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the startup configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the underlying byte channel.
    pub fn into_inner(self) -> C {
        self.channel
    }

    fn set_status(&mut self, status: Status) {
        if self.status == status {
            return;
        }

        self.status = status;

        if let Some(sink) = self.status_sink.as_mut() {
            sink.status_changed(status);
        }
    }
}

impl<C, K> Debug for Scanner<C, K>
where
    C: Debug,
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("channel", &self.channel)
            .field("clock", &self.clock)
            .field("config", &self.config)
            .field("connection", &self.connection)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
