pub mod amount;
pub mod vector;

pub use amount::{BYTES_PER_GB, BYTES_PER_KB, BYTES_PER_MB, ByteAmount};
pub use vector::{CpuAmount, GpuCount, ResourceVector};
