//! Resource vectors used when packing stream-processing instances into containers.
//!
//! A [`resources::ResourceVector`] describes cpu, ram, disk and gpu requirements of an
//! instance or the capacity of a container. [`config::PackingConfiguration`] holds the
//! defaults and padding a packing algorithm works with.

pub(crate) mod internal;

pub type Error = internal::common::error::PackingError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod resources {
    pub use crate::internal::common::resources::{
        BYTES_PER_GB, BYTES_PER_KB, BYTES_PER_MB, ByteAmount, CpuAmount, GpuCount,
        ResourceVector,
    };

    pub use crate::internal::common::format::human_size;
    pub use crate::internal::common::parser::{parse_byte_amount, parse_resource_vector};
}

pub mod config {
    pub use crate::internal::packing::configuration::{
        DEFAULT_PADDING_PERCENTAGE, PackingConfiguration,
    };
}
