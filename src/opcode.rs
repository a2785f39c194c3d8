//! Operation codes understood by the module.

use std::fmt::{Display, Formatter};

/// A command or property opcode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Opcode {
    /// Trigger a scan.
    StartScan,
    /// Stop scanning.
    StopScan,
    /// Restore factory defaults.
    SetDefaults,
    /// Query the firmware version.
    GetVersion,
    /// Buzzer drive frequency.
    BuzzerFrequency,
    /// Beep on successful decode.
    DecodeBeep,
    /// Beep on power-up.
    BootBeep,
    /// White illumination LED.
    FlashLight,
    /// Red aiming light.
    AimLight,
    /// Portion of the image used for decoding.
    ReadingArea,
    /// Mirrored image decoding.
    MirrorFlip,
    /// Character encoding on the USB interface.
    UsbDataFormat,
    /// Character encoding on the serial interface.
    SerialDataFormat,
    /// Invoice mode.
    InvoiceMode,
    /// Virtual keyboard.
    VirtualKeyboard,
    /// Host communication mode.
    CommMode,
    /// Serial bit rate.
    BaudRate,
    /// Reading mode.
    ReadingMode,
    /// Output interval in continuous mode.
    ContinuousModeInterval,
    /// Motion detection threshold.
    MotionSensitivity,
    /// Prefix records with the code ID.
    TransferCodeId,
    /// Keyboard case conversion.
    KbdCaseConversion,
    /// Enable all 1D symbologies.
    EnableAll1D,
    /// Disable all 1D symbologies.
    DisableAll1D,
    /// Enable all 2D symbologies.
    EnableAll2D,
    /// Disable all 2D symbologies.
    DisableAll2D,
}

impl Opcode {
    /// All known opcodes.
    pub const ALL: [Self; 26] = [
        Self::StartScan,
        Self::StopScan,
        Self::SetDefaults,
        Self::GetVersion,
        Self::BuzzerFrequency,
        Self::DecodeBeep,
        Self::BootBeep,
        Self::FlashLight,
        Self::AimLight,
        Self::ReadingArea,
        Self::MirrorFlip,
        Self::UsbDataFormat,
        Self::SerialDataFormat,
        Self::InvoiceMode,
        Self::VirtualKeyboard,
        Self::CommMode,
        Self::BaudRate,
        Self::ReadingMode,
        Self::ContinuousModeInterval,
        Self::MotionSensitivity,
        Self::TransferCodeId,
        Self::KbdCaseConversion,
        Self::EnableAll1D,
        Self::DisableAll1D,
        Self::EnableAll2D,
        Self::DisableAll2D,
    ];

    /// Returns the opcode's wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartScan => "SCAN",
            Self::StopScan => "SLEEP",
            Self::SetDefaults => "DEFALT",
            Self::GetVersion => "DSPYFW",
            Self::BuzzerFrequency => "BEPPWM",
            Self::DecodeBeep => "BEPSUC",
            Self::BootBeep => "BEPPWR",
            Self::FlashLight => "LAMENA",
            Self::AimLight => "AIMENA",
            Self::ReadingArea => "IMGREG",
            Self::MirrorFlip => "MIRLRE",
            Self::UsbDataFormat => "UTFEAN",
            Self::SerialDataFormat => "232UTF",
            Self::InvoiceMode => "SPCINV",
            Self::VirtualKeyboard => "KBDVIR",
            Self::CommMode => "POR",
            Self::BaudRate => "232BAD",
            Self::ReadingMode => "SCM",
            Self::ContinuousModeInterval => "CNTALW",
            Self::MotionSensitivity => "MDTTHR",
            Self::TransferCodeId => "CIDENA",
            Self::KbdCaseConversion => "KBDCNV",
            Self::EnableAll1D => "ODCENA",
            Self::DisableAll1D => "ODCDIS",
            Self::EnableAll2D => "AQRENA",
            Self::DisableAll2D => "AQRDIS",
        }
    }

    /// Splits a frame body into its opcode and the remaining argument.
    ///
    /// If several opcodes match, the longest one wins.
    #[must_use]
    pub fn split_prefix(body: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .filter_map(|opcode| {
                body.strip_prefix(opcode.as_str())
                    .map(|argument| (opcode, argument))
            })
            .max_by_key(|(opcode, _)| opcode.as_str().len())
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
