use chrono::{DateTime, Local, Utc};
use ideaboard_app::domain::Idea;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn IdeaCard(idea: Idea, #[prop(into)] on_upvote: Callback<Uuid>) -> impl IntoView {
    let id = idea.id;

    view! {
        <article class="idea-card">
            <div class="idea-card__body">
                <p class="idea-card__text">{idea.text}</p>
                <p class="idea-card__date">{format_posted_at(idea.created_at)}</p>
            </div>
            <button class="idea-card__upvote" on:click=move |_| on_upvote.run(id)>
                <span class="idea-card__upvote-icon">"👍"</span>
                <span class="idea-card__upvote-count">{idea.upvotes}</span>
            </button>
        </article>
    }
}

/// Card timestamp in the viewer's local time, e.g. "Aug 25, 2026, 14:05".
fn format_posted_at(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y, %H:%M")
        .to_string()
}
