// vim: tw=80
//! Common type definitions used throughout volplan

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// volplan's error type.
///
/// Everything here is fatal to the planning run that raises it.  Shortfall
/// of fast devices is deliberately *not* an error; see
/// [`crate::planner::Plan`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The same device was supplied in more than one role pool.
    #[error("Device lists are not disjoint: {}", .0.join(", "))]
    OverlappingDevices(Vec<String>),
    /// An unparseable size specification.
    #[error("Invalid size specification {0:?}")]
    InvalidSize(String),
    /// An unknown report format name.
    #[error("Invalid report format {0:?}")]
    InvalidFormat(String),
    /// The report serializer failed.  Never caused by an empty plan.
    #[error("Could not serialize report: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A storage capacity in bytes.
///
/// Parses from a raw byte count or a 1024-based unit suffix (`512M`, `5G`,
/// `1.5T`); displays in binary units.  Serializes as the raw byte count.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq,
         PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Size(pub u64);

si_scale::scale_fn!(bibytes,
                    base: B1024,
                    constraint: UnitAndAbove,
                    mantissa_fmt: "{:.2}",
                    groupings: '_',
                    unit: "B");

impl Size {
    pub const fn from_bytes(bytes: u64) -> Self {
        Size(bytes)
    }

    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Size(self.0 + rhs.0)
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Size(self.0 - rhs.0)
    }
}

impl Div<u64> for Size {
    type Output = Self;

    fn div(self, rhs: u64) -> Self::Output {
        Size(self.0 / rhs)
    }
}

impl Mul<u64> for Size {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Size(self.0 * rhs)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", bibytes(self.0 as f64))
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Self {
        Size(bytes)
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let split = t
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(t.len());
        let (mantissa, suffix) = t.split_at(split);
        let m = mantissa
            .parse::<f64>()
            .map_err(|_| Error::InvalidSize(s.to_string()))?;
        let shift = match suffix.trim().to_ascii_uppercase().as_str() {
            "" | "B" => 0u32,
            "K" | "KB" | "KIB" => 10,
            "M" | "MB" | "MIB" => 20,
            "G" | "GB" | "GIB" => 30,
            "T" | "TB" | "TIB" => 40,
            _ => return Err(Error::InvalidSize(s.to_string())),
        };
        Ok(Size((m * (1u64 << shift) as f64) as u64))
    }
}

/// Role of a planned volume.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum VolKind {
    /// Primary data volume
    #[serde(rename = "data")]
    Data,
    /// Key-value metadata volume, placed on a fast device
    #[serde(rename = "block_db")]
    BlockDb,
    /// Write-ahead log volume, placed on a very fast device
    #[serde(rename = "block_wal")]
    BlockWal,
}

impl VolKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VolKind::Data => "data",
            VolKind::BlockDb => "block_db",
            VolKind::BlockWal => "block_wal",
        }
    }
}

impl Display for VolKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

// LCOV_EXCL_STOP
