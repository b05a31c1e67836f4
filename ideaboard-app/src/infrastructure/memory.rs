use crate::domain::Idea;
use chrono::{Duration, Utc};
use std::sync::Mutex;
use uuid::Uuid;

/// Ephemeral [`Idea`] storage: a plain `Vec` behind a mutex.
///
/// Everything lives in process memory and is gone on restart. The mutex
/// serializes each read-modify-write; it is never held across an await
/// point.
pub struct MemoryIdeaStore {
    ideas: Mutex<Vec<Idea>>,
}

/// (text, upvotes, age in hours) for the seeded demo board.
const DEMO_IDEAS: &[(&str, i32, i64)] = &[
    (
        "Create an AI-powered personal assistant that learns from your daily routines and proactively suggests optimizations.",
        12,
        0,
    ),
    (
        "Build a platform that connects local farmers directly with consumers, eliminating middlemen and ensuring fair prices.",
        8,
        1,
    ),
    (
        "Develop a smart waste management system that uses IoT sensors to optimize garbage collection routes and reduce environmental impact.",
        15,
        2,
    ),
];

impl MemoryIdeaStore {
    pub fn new() -> Self {
        Self {
            ideas: Mutex::new(Vec::new()),
        }
    }

    /// Store pre-filled with a few demo ideas for ephemeral deployments.
    pub fn with_demo_ideas() -> Self {
        let now = Utc::now();
        let ideas = DEMO_IDEAS
            .iter()
            .map(|&(text, upvotes, age_hours)| Idea {
                id: Uuid::new_v4(),
                text: text.to_string(),
                upvotes,
                created_at: now - Duration::hours(age_hours),
            })
            .collect();
        Self {
            ideas: Mutex::new(ideas),
        }
    }

    /// All ideas, most upvoted first; equal counts order newest first.
    pub fn list(&self) -> Vec<Idea> {
        let mut ideas = self.ideas.lock().unwrap().clone();
        ideas.sort_by(|a, b| {
            b.upvotes
                .cmp(&a.upvotes)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        ideas
    }

    /// Inserts a fresh idea built from already-validated text.
    pub fn create(&self, text: String) -> Idea {
        let idea = Idea::new(text);
        self.ideas.lock().unwrap().insert(0, idea.clone());
        idea
    }

    /// Adds one upvote to `id`, returning the updated record, or `None`
    /// when no such idea exists.
    pub fn upvote(&self, id: Uuid) -> Option<Idea> {
        let mut ideas = self.ideas.lock().unwrap();
        let idea = ideas.iter_mut().find(|idea| idea.id == id)?;
        idea.upvotes += 1;
        Some(idea.clone())
    }
}

impl Default for MemoryIdeaStore {
    fn default() -> Self {
        Self::new()
    }
}
