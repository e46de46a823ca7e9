pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::{parse_generation, strip_fences, SanitizeError};
pub use prompt::build_instruction;
pub use types::{FileDescriptor, GenerateRequest, GenerationResult, WriteOutcome, WriteRequest};
