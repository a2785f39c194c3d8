//! A simulated module and clock sharing one timeline, for tests.

use crate::protocol::ACK;
use crate::{BaudRate, ByteChannel, Clock, Config, Opcode, Scanner};
use std::cell::{Cell, RefCell};
use std::io::ErrorKind;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Time the simulated module takes to answer a version query.
pub const VERSION_DELAY: Duration = Duration::from_millis(430);

/// Time the simulated module takes to answer any other command.
pub const PROPERTY_DELAY: Duration = Duration::from_millis(20);

type Responder = Box<dyn FnMut(&[u8], BaudRate) -> Option<(Duration, u8)>>;

struct Inner {
    now: Duration,
    baud_rate: BaudRate,
    pending: Vec<(Duration, u8)>,
    written: Vec<(BaudRate, Vec<u8>)>,
    baud_rate_changes: Vec<BaudRate>,
    responder: Option<Responder>,
    broken: bool,
}

impl Inner {
    fn schedule(&mut self, at: Duration, byte: u8) {
        let index = self.pending.partition_point(|(time, _)| *time <= at);
        self.pending.insert(index, (at, byte));
    }

    fn check(&self) -> std::io::Result<()> {
        if self.broken {
            Err(std::io::Error::new(ErrorKind::NotConnected, "channel broken"))
        } else {
            Ok(())
        }
    }
}

/// Shared state of a simulated channel and clock.
#[derive(Clone)]
pub struct Simulation {
    start: Instant,
    inner: Rc<RefCell<Inner>>,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            inner: Rc::new(RefCell::new(Inner {
                now: Duration::ZERO,
                baud_rate: BaudRate::HIGH,
                pending: Vec::new(),
                written: Vec::new(),
                baud_rate_changes: Vec::new(),
                responder: None,
                broken: false,
            })),
        }
    }

    pub fn scanner(&self) -> Scanner<SimulatedChannel, SimulatedClock> {
        self.scanner_with(Config::default())
    }

    pub fn scanner_with(&self, config: Config) -> Scanner<SimulatedChannel, SimulatedClock> {
        let baud_rate = self.inner.borrow().baud_rate;
        Scanner::with_config(
            SimulatedChannel(self.clone()),
            SimulatedClock(self.clone()),
            config,
        )
        .assuming_baud_rate(baud_rate)
    }

    /// Makes the byte available after the given delay from now.
    pub fn reply_after(&self, delay: Duration, byte: u8) {
        let mut inner = self.inner.borrow_mut();
        let at = inner.now + delay;
        inner.schedule(at, byte);
    }

    /// Makes the bytes available immediately.
    pub fn feed(&self, bytes: &[u8]) {
        for byte in bytes {
            self.reply_after(Duration::ZERO, *byte);
        }
    }

    /// Answers every written frame using the given function.
    pub fn respond_with<F>(&self, responder: F)
    where
        F: FnMut(&[u8], BaudRate) -> Option<(Duration, u8)> + 'static,
    {
        self.inner.borrow_mut().responder = Some(Box::new(responder));
    }

    /// Attaches a module listening at the given bit rate.
    ///
    /// The module acknowledges every frame received at its own bit rate
    /// and switches its bit rate upon a bit rate command or a factory reset.
    /// The returned cell holds the module's current bit rate.
    pub fn attach_module(&self, baud_rate: BaudRate) -> Rc<Cell<BaudRate>> {
        let module = Rc::new(Cell::new(baud_rate));
        let state = module.clone();
        self.respond_with(move |frame, channel_rate| {
            if channel_rate != state.get() {
                return None;
            }

            let command = crate::Command::try_from(frame).ok()?;

            match command.opcode() {
                Opcode::GetVersion => Some((VERSION_DELAY, ACK)),
                Opcode::BaudRate => {
                    let new_rate = [
                        BaudRate::Bps1200,
                        BaudRate::Bps2400,
                        BaudRate::Bps4800,
                        BaudRate::Bps9600,
                        BaudRate::Bps19200,
                        BaudRate::Bps38400,
                        BaudRate::Bps57600,
                        BaudRate::Bps115200,
                    ]
                    .into_iter()
                    .find(|rate| rate.argument() == command.argument())?;
                    state.set(new_rate);
                    Some((PROPERTY_DELAY, ACK))
                }
                Opcode::SetDefaults => {
                    state.set(BaudRate::HIGH);
                    Some((PROPERTY_DELAY, ACK))
                }
                _ => Some((PROPERTY_DELAY, ACK)),
            }
        });
        module
    }

    /// Makes every channel operation fail.
    pub fn break_channel(&self) {
        self.inner.borrow_mut().broken = true;
    }

    pub fn elapsed(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Returns all written frames.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.inner
            .borrow()
            .written
            .iter()
            .map(|(_, bytes)| bytes.clone())
            .collect()
    }

    /// Returns all written frames along with the bit rate they were written at.
    pub fn written_at(&self) -> Vec<(BaudRate, Vec<u8>)> {
        self.inner.borrow().written.clone()
    }

    pub fn baud_rate_changes(&self) -> Vec<BaudRate> {
        self.inner.borrow().baud_rate_changes.clone()
    }
}

#[derive(Clone)]
pub struct SimulatedChannel(Simulation);

impl std::fmt::Debug for SimulatedChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimulatedChannel")
    }
}

impl ByteChannel for SimulatedChannel {
    fn is_readable(&mut self) -> std::io::Result<bool> {
        let inner = self.0.inner.borrow();
        inner.check()?;
        Ok(inner
            .pending
            .first()
            .is_some_and(|(time, _)| *time <= inner.now))
    }

    fn read_byte(&mut self) -> std::io::Result<u8> {
        let mut inner = self.0.inner.borrow_mut();
        inner.check()?;

        let now = inner.now;

        if inner.pending.first().is_some_and(|(time, _)| *time <= now) {
            Ok(inner.pending.remove(0).1)
        } else {
            Err(std::io::Error::new(ErrorKind::WouldBlock, "no byte available"))
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let mut inner = self.0.inner.borrow_mut();
        inner.check()?;
        let baud_rate = inner.baud_rate;
        inner.written.push((baud_rate, bytes.to_vec()));

        let reply = inner
            .responder
            .as_mut()
            .and_then(|responder| responder(bytes, baud_rate));

        if let Some((delay, byte)) = reply {
            let at = inner.now + delay;
            inner.schedule(at, byte);
        }

        Ok(())
    }

    fn set_baud_rate(&mut self, baud_rate: BaudRate) -> std::io::Result<()> {
        let mut inner = self.0.inner.borrow_mut();
        inner.check()?;
        inner.baud_rate = baud_rate;
        inner.baud_rate_changes.push(baud_rate);
        Ok(())
    }
}

#[derive(Clone)]
pub struct SimulatedClock(Simulation);

impl std::fmt::Debug for SimulatedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimulatedClock")
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Instant {
        self.0.start + self.0.inner.borrow().now
    }

    fn sleep(&mut self, duration: Duration) {
        self.0.inner.borrow_mut().now += duration;
    }
}
