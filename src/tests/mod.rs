//! Integration testing module
//!
//! Cross-stage tests for the assembler:
//! - Transcript fixtures covering chunk overlap, hallucinations and speakers
//! - Pipeline scenarios through the public assembler
//! - Timeline and codec properties over deterministic sample grids
//! - SRT document validation helpers

pub mod fixtures;
