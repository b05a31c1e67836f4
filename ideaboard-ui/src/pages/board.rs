use crate::components::{IdeaCard, IdeaComposer, LoadingSpinner};
use ideaboard_app::domain::Idea;
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use server_fn::ServerFnError;
use std::time::Duration;
use uuid::Uuid;

/// How often the board re-fetches the list in the background.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[server(ListIdeasFn, "/api", endpoint = "list_ideas")]
pub async fn list_ideas() -> Result<Vec<Idea>, ServerFnError> {
    use ideaboard_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.store.list().await.map_err(|e| {
        tracing::error!("Failed to list ideas: {e}");
        ServerFnError::new("Failed to fetch ideas")
    })
}

#[server(SubmitIdeaFn, "/api", endpoint = "submit_idea")]
pub async fn submit_idea(text: String) -> Result<Idea, ServerFnError> {
    use ideaboard_app::domain::validate_idea_text;
    use ideaboard_app::AppContext;

    let ctx = expect_context::<AppContext>();

    let text = validate_idea_text(&text).map_err(|e| ServerFnError::new(e.to_string()))?;

    ctx.store.create(text).await.map_err(|e| {
        tracing::error!("Failed to create idea: {e}");
        ServerFnError::new("Failed to create idea")
    })
}

#[server(UpvoteIdeaFn, "/api", endpoint = "upvote_idea")]
pub async fn upvote_idea(id: Uuid) -> Result<Idea, ServerFnError> {
    use ideaboard_app::store::StoreError;
    use ideaboard_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.store.upvote(id).await.map_err(|e| match e {
        StoreError::NotFound(_) => ServerFnError::new("Idea not found"),
        StoreError::Db(err) => {
            tracing::error!("Failed to upvote idea {id}: {err}");
            ServerFnError::new("Failed to upvote idea")
        }
    })
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let ideas = RwSignal::new(Vec::<Idea>::new());
    let draft = RwSignal::new(String::new());

    let fetch_ideas = Action::new(move |_: &()| async move {
        match list_ideas().await {
            Ok(list) => ideas.set(list),
            Err(err) => leptos::logging::error!("Error fetching ideas: {err}"),
        }
    });

    let submit = Action::new(move |text: &String| {
        let text = text.clone();
        async move {
            match submit_idea(text).await {
                Ok(idea) => {
                    // New ideas go straight to the top; the next poll puts
                    // them into popularity order.
                    ideas.update(|list| list.insert(0, idea));
                    draft.set(String::new());
                }
                Err(err) => leptos::logging::error!("Error submitting idea: {err}"),
            }
        }
    });

    let upvote = Action::new(move |id: &Uuid| {
        let id = *id;
        async move {
            match upvote_idea(id).await {
                Ok(updated) => {
                    // Swap in place without re-sorting, so cards do not jump
                    // around mid-click.
                    ideas.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|idea| idea.id == updated.id) {
                            *slot = updated;
                        }
                    });
                }
                Err(err) => leptos::logging::error!("Error upvoting idea: {err}"),
            }
        }
    });

    let loading = fetch_ideas.pending();
    let submitting = submit.pending();

    let on_submit = Callback::new(move |text: String| {
        submit.dispatch(text);
    });
    let on_upvote = Callback::new(move |id: Uuid| {
        upvote.dispatch(id);
    });

    // Fetch on mount, then poll. Effects only run in the browser, so the
    // server-rendered page stays inert until hydration.
    let poll_handle = StoredValue::new_local(None::<IntervalHandle>);
    Effect::new(move |_| {
        fetch_ideas.dispatch(());

        if let Ok(handle) = set_interval_with_handle(
            move || {
                fetch_ideas.dispatch(());
            },
            POLL_INTERVAL,
        ) {
            poll_handle.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        if let Some(handle) = poll_handle.get_value() {
            handle.clear();
        }
    });

    view! {
        <header class="board-header">
            <h1 class="board-header__title">"The Idea Board"</h1>
            <span class="board-header__count">
                {move || format!("{} ideas shared", ideas.with(|list| list.len()))}
            </span>
        </header>

        <IdeaComposer draft=draft on_submit=on_submit is_submitting=submitting/>

        <section class="idea-list">
            <div class="idea-list__header">
                <h2 class="idea-list__title">"Community Ideas"</h2>
                <button
                    class="idea-list__refresh"
                    on:click=move |_| {
                        fetch_ideas.dispatch(());
                    }
                    prop:disabled=move || loading.get()
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            {move || {
                if loading.get() && ideas.with(|list| list.is_empty()) {
                    view! { <LoadingSpinner/> }.into_any()
                } else if ideas.with(|list| list.is_empty()) {
                    view! {
                        <div class="idea-list__empty">
                            <span class="idea-list__empty-icon">"💡"</span>
                            <h3 class="idea-list__empty-title">"No ideas yet"</h3>
                            <p class="idea-list__empty-hint">"Be the first to share a brilliant idea!"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="idea-list__items">
                            {ideas
                                .get()
                                .into_iter()
                                .map(|idea| view! { <IdeaCard idea=idea on_upvote=on_upvote/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
