//! Typed arguments of the module's property commands.

use crate::Error;
use std::fmt::{Display, Formatter};

/// Motion detection threshold.
///
/// Lower thresholds react to smaller changes in the image.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Sensitivity {
    /// Extremely high sensitivity.
    ExtremelyHigh = 15,
    /// High sensitivity, the module's default.
    #[default]
    High = 20,
    /// Highish sensitivity.
    Highish = 30,
    /// Medium sensitivity.
    Medium = 50,
    /// Low sensitivity.
    Low = 100,
}

impl Sensitivity {
    /// Returns the argument of the motion sensitivity property command.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::ExtremelyHigh => "15",
            Self::High => "20",
            Self::Highish => "30",
            Self::Medium => "50",
            Self::Low => "100",
        }
    }
}

impl TryFrom<u8> for Sensitivity {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            15 => Ok(Self::ExtremelyHigh),
            20 => Ok(Self::High),
            30 => Ok(Self::Highish),
            50 => Ok(Self::Medium),
            100 => Ok(Self::Low),
            other => Err(Error::InvalidArgument {
                name: "sensitivity",
                value: other.into(),
            }),
        }
    }
}

impl Display for Sensitivity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.argument())
    }
}

/// Buzzer drive mode.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BuzzerFrequency {
    /// Active drive.
    Active,
    /// Passive, low frequency.
    PassiveLow,
    /// Passive, medium frequency.
    #[default]
    PassiveMedium,
    /// Passive, high frequency.
    PassiveHigh,
}

impl BuzzerFrequency {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Active => "0",
            Self::PassiveLow => "1",
            Self::PassiveMedium => "2",
            Self::PassiveHigh => "3",
        }
    }
}

/// Portion of the image width used for decoding.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ReadingArea {
    /// Full width.
    #[default]
    Full,
    /// Center 80 %.
    Center80,
    /// Center 60 %.
    Center60,
    /// Center 40 %.
    Center40,
    /// Center 20 %.
    Center20,
}

impl ReadingArea {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Full => "0",
            Self::Center80 => "1",
            Self::Center60 => "2",
            Self::Center40 => "3",
            Self::Center20 => "4",
        }
    }
}

/// Character encoding of records sent over USB.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UsbDataFormat {
    /// GBK
    #[default]
    Gbk,
    /// UTF-8
    Utf8,
}

impl UsbDataFormat {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Gbk => "0",
            Self::Utf8 => "1",
        }
    }
}

/// Character encoding of records sent over the serial interface.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SerialDataFormat {
    /// GBK
    #[default]
    Gbk,
    /// UTF-8
    Utf8,
    /// Unicode, big endian.
    UnicodeBigEndian,
    /// Unicode, little endian.
    UnicodeLittleEndian,
}

impl SerialDataFormat {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Gbk => "0",
            Self::Utf8 => "1",
            Self::UnicodeBigEndian => "2",
            Self::UnicodeLittleEndian => "3",
        }
    }
}

/// Interface the module talks to the host over.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CommMode {
    /// USB keyboard wedge.
    UsbKeyboard,
    /// USB HID.
    UsbHid,
    /// USB virtual COM port.
    UsbCom,
    /// TTL / RS232.
    Serial,
}

impl CommMode {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::UsbKeyboard => "KBD",
            Self::UsbHid => "HID",
            Self::UsbCom => "VIC",
            Self::Serial => "232",
        }
    }
}

/// When the module reads barcodes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ReadingMode {
    /// Scan on trigger only.
    #[default]
    Manual,
    /// Scan continuously.
    Continuous,
    /// Scan when motion is detected.
    Motion,
}

impl ReadingMode {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Manual => "MAN",
            Self::Continuous => "CNT",
            Self::Motion => "MDH",
        }
    }
}

/// Output behaviour in continuous reading mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContinuousInterval {
    /// Output each code once.
    Once,
    /// Output continuously without interval.
    NoInterval,
    /// Output continuously every half second.
    HalfSecond,
    /// Output continuously every second.
    OneSecond,
}

impl ContinuousInterval {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Once => "0",
            Self::NoInterval => "1",
            Self::HalfSecond => "2",
            Self::OneSecond => "3",
        }
    }
}

/// Case conversion applied in keyboard mode.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CaseConversion {
    /// No conversion.
    #[default]
    None,
    /// All upper case.
    Upper,
    /// All lower case.
    Lower,
    /// Swap case.
    Invert,
}

impl CaseConversion {
    /// Returns the command argument.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Upper => "1",
            Self::Lower => "2",
            Self::Invert => "3",
        }
    }
}

/// Returns the argument of on / off properties.
pub(crate) const fn switch(on: bool) -> &'static str {
    if on {
        "1"
    } else {
        "0"
    }
}
