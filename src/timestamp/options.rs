//! Timestamp display options.
//!
//! A [`TimestampConfig`] pairs a [`DateOrder`] with a set of
//! [`DisplayFlags`]. There are two scopes: per-instance configs, and one
//! process-wide default that new instances copy when they are built with
//! [`TimestampConfig::inherited`].

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Order of the year, month and day fields in a date stamp.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum DateOrder {
    /// `2024-03-05`
    #[default]
    #[serde(rename = "yyyy_mm_dd")]
    #[value(name = "yyyy_mm_dd")]
    YearMonthDay,
    /// `03-05-2024`
    #[serde(rename = "mm_dd_yyyy")]
    #[value(name = "mm_dd_yyyy")]
    MonthDayYear,
    /// `05-03-2024`
    #[serde(rename = "dd_mm_yyyy")]
    #[value(name = "dd_mm_yyyy")]
    DayMonthYear,
}

/// A single display option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DisplayFlag {
    /// `MAR` instead of `03`.
    MonthAsText,
    /// `01:04:05_PM` instead of `13:04:05`.
    TwelveHour,
    /// Drop the trailing weekday code.
    HideWeekday,
    /// `3-5` instead of `03-05`.
    HideZero,
    /// Use a space as the filler character instead of an underscore.
    UseSpace,
    /// Drop the year field.
    HideYear,
    /// `13:04` instead of `13:04:05`.
    HideSeconds,
}

impl DisplayFlag {
    /// Every flag, in bit order.
    pub const ALL: [DisplayFlag; 7] = [
        DisplayFlag::MonthAsText,
        DisplayFlag::TwelveHour,
        DisplayFlag::HideWeekday,
        DisplayFlag::HideZero,
        DisplayFlag::UseSpace,
        DisplayFlag::HideYear,
        DisplayFlag::HideSeconds,
    ];

    /// The bit this flag occupies in a [`DisplayFlags`] set.
    pub const fn bit(self) -> u8 {
        match self {
            DisplayFlag::MonthAsText => 1 << 0,
            DisplayFlag::TwelveHour => 1 << 1,
            DisplayFlag::HideWeekday => 1 << 2,
            DisplayFlag::HideZero => 1 << 3,
            DisplayFlag::UseSpace => 1 << 4,
            DisplayFlag::HideYear => 1 << 5,
            DisplayFlag::HideSeconds => 1 << 6,
        }
    }
}

/// Bit set of [`DisplayFlag`]s.
///
/// Serialized as a list of flag names.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<DisplayFlag>", into = "Vec<DisplayFlag>")]
pub struct DisplayFlags(u8);

impl DisplayFlags {
    /// The empty set: numeric month, 24-hour clock, everything shown.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from its raw bits; unknown bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x7f)
    }

    /// The raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `flag` is set.
    pub const fn contains(self, flag: DisplayFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Copy of this set with `flag` switched on or off.
    #[must_use]
    pub const fn with(self, flag: DisplayFlag, on: bool) -> Self {
        if on {
            Self(self.0 | flag.bit())
        } else {
            Self(self.0 & !flag.bit())
        }
    }

    /// Switch `flag` on or off in place.
    pub fn set(&mut self, flag: DisplayFlag, on: bool) {
        *self = self.with(flag, on);
    }

    /// Iterate the flags that are set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = DisplayFlag> {
        DisplayFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    /// The filler character placed before the weekday and the AM/PM tag.
    pub const fn filler(self) -> char {
        if self.contains(DisplayFlag::UseSpace) {
            ' '
        } else {
            '_'
        }
    }
}

impl From<DisplayFlag> for DisplayFlags {
    fn from(flag: DisplayFlag) -> Self {
        Self(flag.bit())
    }
}

impl From<Vec<DisplayFlag>> for DisplayFlags {
    fn from(flags: Vec<DisplayFlag>) -> Self {
        flags.into_iter().collect()
    }
}

impl From<DisplayFlags> for Vec<DisplayFlag> {
    fn from(flags: DisplayFlags) -> Self {
        flags.iter().collect()
    }
}

impl FromIterator<DisplayFlag> for DisplayFlags {
    fn from_iter<I: IntoIterator<Item = DisplayFlag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, flag| acc.with(flag, true))
    }
}

impl BitOr for DisplayFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<DisplayFlag> for DisplayFlags {
    type Output = Self;

    fn bitor(self, rhs: DisplayFlag) -> Self {
        self.with(rhs, true)
    }
}

impl BitOr for DisplayFlag {
    type Output = DisplayFlags;

    fn bitor(self, rhs: Self) -> DisplayFlags {
        DisplayFlags::from(self) | rhs
    }
}

impl BitOrAssign<DisplayFlag> for DisplayFlags {
    fn bitor_assign(&mut self, rhs: DisplayFlag) {
        self.set(rhs, true);
    }
}

impl fmt::Debug for DisplayFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Date order plus display flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampConfig {
    #[serde(default)]
    pub order: DateOrder,
    #[serde(default)]
    pub flags: DisplayFlags,
}

static DEFAULTS: RwLock<TimestampConfig> = parking_lot::const_rwlock(TimestampConfig::new(
    DateOrder::YearMonthDay,
    DisplayFlags::empty(),
));

impl TimestampConfig {
    /// Create a config from an order and a flag set.
    pub const fn new(order: DateOrder, flags: DisplayFlags) -> Self {
        Self { order, flags }
    }

    /// Snapshot of the process-wide default config.
    ///
    /// Later changes to the defaults do not reach configs created earlier.
    pub fn inherited() -> Self {
        default_config()
    }

    /// Copy with a different date order.
    #[must_use]
    pub const fn with_order(self, order: DateOrder) -> Self {
        Self::new(order, self.flags)
    }

    /// Copy with `flag` switched on or off.
    #[must_use]
    pub const fn with_flag(self, flag: DisplayFlag, on: bool) -> Self {
        Self::new(self.order, self.flags.with(flag, on))
    }

    /// Whether `flag` is set.
    pub const fn has(&self, flag: DisplayFlag) -> bool {
        self.flags.contains(flag)
    }
}

/// The process-wide default config.
pub fn default_config() -> TimestampConfig {
    *DEFAULTS.read()
}

/// Replace the process-wide default config.
pub fn set_default_config(config: TimestampConfig) {
    *DEFAULTS.write() = config;
}

/// Change the date order of the process-wide default config.
pub fn set_default_order(order: DateOrder) {
    DEFAULTS.write().order = order;
}

/// Switch one flag of the process-wide default config.
pub fn set_default_flag(flag: DisplayFlag, on: bool) {
    DEFAULTS.write().flags.set(flag, on);
}
