pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod parser;
pub mod resources;
