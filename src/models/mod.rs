mod envelope;
mod metadata;

pub use envelope::ApiResponse;
pub use metadata::{Metadata, OpenGraph};
