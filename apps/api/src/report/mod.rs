// Deterministic text rendering: candidate emails and the evaluation report.

pub mod email;
pub mod summary;
