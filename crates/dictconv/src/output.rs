//! Types modeling the output files and the functionality for deriving them from the inputs.

pub mod kanjifile;
pub mod vocabfile;
