//! Types modeling the input files.

pub mod jmdict;
pub mod kanjidic2;
