pub(crate) mod common;
pub mod packing;

#[cfg(test)]
pub mod tests;
