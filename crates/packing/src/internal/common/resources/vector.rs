use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::internal::common::error::PackingError;
use crate::internal::common::format::human_cpu;
use crate::internal::common::parser::parse_resource_vector;
use crate::internal::common::resources::ByteAmount;

pub type CpuAmount = f64;
pub type GpuCount = u32;

/// Resources of a single instance or of a whole container.
///
/// Values are immutable, every `with_*` method returns a modified copy.
/// Construction does not validate anything; operations that compute a remaining
/// need never produce a negative component.
///
/// Equality and hashing only take cpu, ram and disk into account, two vectors
/// that differ only in the number of gpus are considered equal.
///
/// The type implements `Eq` under the assumption that cpu is never NaN. A vector
/// with a NaN cpu is not equal to itself, so it must not be used as a map or set key.
/// The gpu count saturates at `u32::MAX` when vectors are added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceVector {
    cpu: CpuAmount,
    ram: ByteAmount,
    disk: ByteAmount,
    gpu: GpuCount,
}

impl ResourceVector {
    pub const EMPTY: ResourceVector = ResourceVector {
        cpu: 0.0,
        ram: ByteAmount::ZERO,
        disk: ByteAmount::ZERO,
        gpu: 0,
    };

    pub fn new(cpu: CpuAmount, ram: ByteAmount, disk: ByteAmount, gpu: GpuCount) -> Self {
        ResourceVector {
            cpu,
            ram,
            disk,
            gpu,
        }
    }

    #[inline]
    pub fn cpu(&self) -> CpuAmount {
        self.cpu
    }

    #[inline]
    pub fn ram(&self) -> ByteAmount {
        self.ram
    }

    #[inline]
    pub fn disk(&self) -> ByteAmount {
        self.disk
    }

    #[inline]
    pub fn gpu(&self) -> GpuCount {
        self.gpu
    }

    pub fn with_cpu(&self, cpu: CpuAmount) -> Self {
        ResourceVector { cpu, ..*self }
    }

    pub fn with_ram(&self, ram: ByteAmount) -> Self {
        ResourceVector { ram, ..*self }
    }

    pub fn with_disk(&self, disk: ByteAmount) -> Self {
        ResourceVector { disk, ..*self }
    }

    pub fn with_gpu(&self, gpu: GpuCount) -> Self {
        ResourceVector { gpu, ..*self }
    }

    pub fn plus(&self, other: &ResourceVector) -> Self {
        ResourceVector {
            cpu: self.cpu + other.cpu,
            ram: self.ram + other.ram,
            disk: self.disk + other.disk,
            gpu: self.gpu.saturating_add(other.gpu),
        }
    }

    /// Subtracts `other` from this vector. Every component is clamped at zero,
    /// so the result is what is still missing after `other` is fulfilled.
    pub fn subtract_absolute(&self, other: &ResourceVector) -> Self {
        ResourceVector {
            cpu: (self.cpu - other.cpu).max(0.0),
            ram: self.ram - other.ram,
            disk: self.disk - other.disk,
            gpu: self.gpu.saturating_sub(other.gpu),
        }
    }

    /// Returns how many copies of `other` are needed to cover this vector.
    ///
    /// Every dimension is divided separately and rounded up, the largest factor wins.
    /// Gpus do not take part in the computation. Fails with
    /// [`PackingError::InvalidDivisor`] when `other` has zero cpu, ram or disk.
    pub fn divide_by(&self, other: &ResourceVector) -> crate::Result<f64> {
        if other.cpu == 0.0 || other.ram.is_zero() || other.disk.is_zero() {
            return Err(PackingError::InvalidDivisor(*other));
        }
        let cpu_factor = (self.cpu / other.cpu).ceil();
        let ram_factor = (self.ram.as_bytes() as f64 / other.ram.as_bytes() as f64).ceil();
        let disk_factor = (self.disk.as_bytes() as f64 / other.disk.as_bytes() as f64).ceil();
        Ok(cpu_factor.max(ram_factor).max(disk_factor))
    }
}

impl Default for ResourceVector {
    fn default() -> Self {
        ResourceVector::EMPTY
    }
}

impl PartialEq for ResourceVector {
    fn eq(&self, other: &Self) -> bool {
        self.cpu == other.cpu && self.ram == other.ram && self.disk == other.disk
    }
}

// See the type documentation for NaN cpu values
impl Eq for ResourceVector {}

impl Hash for ResourceVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 and -0.0 are equal, they have to hash the same
        let cpu = if self.cpu == 0.0 { 0.0f64 } else { self.cpu };
        cpu.to_bits().hash(state);
        self.ram.hash(state);
        self.disk.hash(state);
    }
}

impl std::ops::Add for ResourceVector {
    type Output = ResourceVector;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl std::iter::Sum for ResourceVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ResourceVector::EMPTY, |acc, v| acc.plus(&v))
    }
}

impl<'a> std::iter::Sum<&'a ResourceVector> for ResourceVector {
    fn sum<I: Iterator<Item = &'a ResourceVector>>(iter: I) -> Self {
        iter.fold(ResourceVector::EMPTY, |acc, v| acc.plus(v))
    }
}

impl std::fmt::Display for ResourceVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{cpu: {}, ram: {}, disk: {}, gpu: {}}}",
            human_cpu(self.cpu),
            self.ram,
            self.disk,
            self.gpu
        )
    }
}

impl FromStr for ResourceVector {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resource_vector(s)
    }
}
