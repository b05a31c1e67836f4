mod board;

pub use board::{BoardPage, ListIdeasFn, SubmitIdeaFn, UpvoteIdeaFn};
