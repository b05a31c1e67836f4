mod idea;

pub use idea::{validate_idea_text, Idea, MAX_IDEA_CHARS};
