mod idea_card;
mod idea_composer;
mod loading_spinner;

pub use idea_card::IdeaCard;
pub use idea_composer::IdeaComposer;
pub use loading_spinner::LoadingSpinner;
