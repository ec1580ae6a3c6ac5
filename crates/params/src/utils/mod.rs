//! Constant values grouped by primitive family

pub mod symmetric;
