pub mod types;
pub mod extract;

// Re-export the most common items for convenience
pub use types::Frontmatter;
pub use extract::{has_front_matter, parse, split_front_matter};
