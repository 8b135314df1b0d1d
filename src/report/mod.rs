//! Alignment report writers.
//!
//! Two wire formats: one tab-separated row per alignment (`tsv`) and the
//! EMBOSS-style pairwise block (`pair`). Both write into any
//! `std::io::Write`; flushing stays with the caller so loss on crash is
//! bounded per record.

pub mod pair;
pub mod tsv;
