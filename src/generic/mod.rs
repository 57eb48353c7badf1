//! Generic structures, not specific to molecular computing.

pub mod random;
