pub const START_MARKER: &[u8] = b"^_^";
pub const END_MARKER: u8 = b'.';
pub const ACK: u8 = 0x06;
pub const NAK: u8 = 0x15;
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const NUL: u8 = 0x00;

/// Including start and end markers.
pub const MAX_FRAME_SIZE: usize = 14;
