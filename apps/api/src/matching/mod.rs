// Candidate evaluation: keyword skills, remarks, embedding similarity, ranking.
// Handlers own the HTTP boundary (multipart parsing, batch cap); everything
// else here is request-agnostic.

pub mod handlers;
pub mod pipeline;
pub mod remarks;
pub mod similarity;
pub mod skills;
