//! Small process-level helpers.

pub mod shutdown;
