#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Status {
    #[default]
    Disconnected,
    Connected,
    Failed,
}

/// Receives status transitions, e.g. to drive a status LED.
pub trait StatusSink {
    fn status_changed(&mut self, status: Status);
}

impl<F> StatusSink for F
where
    F: FnMut(Status),
{
    fn status_changed(&mut self, status: Status) {
        self(status);
    }
}
