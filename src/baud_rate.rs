use std::fmt::{Display, Formatter};

/// Serial bit rates supported by the module.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u32)]
pub enum BaudRate {
    /// 1200 bps
    Bps1200 = 1_200,
    /// 2400 bps
    Bps2400 = 2_400,
    /// 4800 bps
    Bps4800 = 4_800,
    /// 9600 bps, used for steady-state operation.
    Bps9600 = 9_600,
    /// 19200 bps
    Bps19200 = 19_200,
    /// 38400 bps
    Bps38400 = 38_400,
    /// 57600 bps
    Bps57600 = 57_600,
    /// 115200 bps, the module's factory default.
    Bps115200 = 115_200,
}

impl BaudRate {
    /// The rate the driver operates the channel at.
    pub const LOW: Self = Self::Bps9600;

    /// The rate the module may be left at, e.g. after a factory reset.
    pub const HIGH: Self = Self::Bps115200;

    /// Returns the argument of the bit rate property command selecting this rate.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Bps1200 => "2",
            Self::Bps2400 => "3",
            Self::Bps4800 => "4",
            Self::Bps9600 => "5",
            Self::Bps19200 => "6",
            Self::Bps38400 => "7",
            Self::Bps57600 => "8",
            Self::Bps115200 => "9",
        }
    }
}

impl From<BaudRate> for u32 {
    fn from(baud_rate: BaudRate) -> Self {
        baud_rate as Self
    }
}

impl Display for BaudRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} baud", u32::from(*self))
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for BaudRate {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Bps1200,
            Self::Bps2400,
            Self::Bps4800,
            Self::Bps9600,
            Self::Bps19200,
            Self::Bps38400,
            Self::Bps57600,
            Self::Bps115200,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Bps1200 => clap::builder::PossibleValue::new("1200"),
            Self::Bps2400 => clap::builder::PossibleValue::new("2400"),
            Self::Bps4800 => clap::builder::PossibleValue::new("4800"),
            Self::Bps9600 => clap::builder::PossibleValue::new("9600"),
            Self::Bps19200 => clap::builder::PossibleValue::new("19200"),
            Self::Bps38400 => clap::builder::PossibleValue::new("38400"),
            Self::Bps57600 => clap::builder::PossibleValue::new("57600"),
            Self::Bps115200 => clap::builder::PossibleValue::new("115200"),
        })
    }
}
