use std::str::FromStr;

use derive_more::{Add, AddAssign, Sum};
use serde::{Deserialize, Deserializer, Serialize};

use crate::internal::common::format::human_size;
use crate::internal::common::parser::parse_byte_amount;

pub const BYTES_PER_KB: u64 = 1024;
pub const BYTES_PER_MB: u64 = 1024 * BYTES_PER_KB;
pub const BYTES_PER_GB: u64 = 1024 * BYTES_PER_MB;

/// Size of memory or disk, stored as a number of bytes.
///
/// Subtraction saturates at zero, a byte amount is never negative.
#[derive(
    Debug,
    Serialize,
    Clone,
    Copy,
    Default,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    AddAssign,
    Add,
    Sum,
)]
#[serde(transparent)]
pub struct ByteAmount(u64);

impl ByteAmount {
    pub const ZERO: ByteAmount = ByteAmount(0);

    pub const fn from_bytes(bytes: u64) -> Self {
        ByteAmount(bytes)
    }

    pub const fn from_kilobytes(kb: u64) -> Self {
        ByteAmount(kb * BYTES_PER_KB)
    }

    pub const fn from_megabytes(mb: u64) -> Self {
        ByteAmount(mb * BYTES_PER_MB)
    }

    pub const fn from_gigabytes(gb: u64) -> Self {
        ByteAmount(gb * BYTES_PER_GB)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn as_bytes(&self) -> u64 {
        self.0
    }

    pub fn as_megabytes(&self) -> u64 {
        self.0 / BYTES_PER_MB
    }

    pub fn as_gigabytes(&self) -> u64 {
        self.0 / BYTES_PER_GB
    }

    /// Adds `percentage` % of the amount, rounded down. The result saturates at `u64::MAX`.
    pub fn increase_by_percentage(&self, percentage: u32) -> Self {
        let increment = self.0 as u128 * percentage as u128 / 100;
        ByteAmount(u64::try_from(self.0 as u128 + increment).unwrap_or(u64::MAX))
    }
}

impl std::ops::Sub for ByteAmount {
    type Output = ByteAmount;

    fn sub(self, rhs: Self) -> Self::Output {
        ByteAmount(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::SubAssign for ByteAmount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::fmt::Display for ByteAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&human_size(self.0))
    }
}

impl FromStr for ByteAmount {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_byte_amount(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ByteAmountRepr {
    Bytes(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ByteAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ByteAmountRepr::deserialize(deserializer)? {
            ByteAmountRepr::Bytes(bytes) => Ok(ByteAmount(bytes)),
            ByteAmountRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
