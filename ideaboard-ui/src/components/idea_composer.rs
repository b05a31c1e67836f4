use ideaboard_app::domain::MAX_IDEA_CHARS;
use leptos::prelude::*;

#[component]
pub fn IdeaComposer(
    draft: RwSignal<String>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] is_submitting: Signal<bool>,
) -> impl IntoView {
    let char_count = move || draft.with(|text| text.chars().count());
    let over_limit = move || char_count() > MAX_IDEA_CHARS;
    let blank = move || draft.with(|text| text.trim().is_empty());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.with(|text| text.trim().to_string());
        if !text.is_empty() && !over_limit() {
            on_submit.run(text);
        }
    };

    view! {
        <form class="idea-form" on:submit=on_form_submit>
            <h2 class="idea-form__title">"Share Your Idea"</h2>
            <textarea
                class="idea-form__input"
                placeholder="What's your brilliant idea? (max 280 characters)"
                rows="3"
                maxlength=MAX_IDEA_CHARS.to_string()
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                prop:disabled=move || is_submitting.get()
            ></textarea>
            <div class="idea-form__meta">
                <span class="idea-form__count">
                    {move || format!("{}/{} characters", char_count(), MAX_IDEA_CHARS)}
                </span>
                {move || {
                    over_limit()
                        .then(|| {
                            view! {
                                <span class="idea-form__warning">
                                    "Too long! Please shorten your idea."
                                </span>
                            }
                        })
                }}
            </div>
            <button
                type="submit"
                class="idea-form__button"
                prop:disabled=move || blank() || over_limit() || is_submitting.get()
            >
                {move || if is_submitting.get() { "Sharing..." } else { "Share Idea" }}
            </button>
        </form>
    }
}
