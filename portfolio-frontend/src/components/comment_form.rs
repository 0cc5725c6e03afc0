use leptos::{ev, *};

use portfolio_core::{entities::comment::NewComment, new_comment};

use crate::CommentSection;

/// Lets a logged in viewer write a new comment.
#[component]
pub fn CommentForm(section: CommentSection) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let post_comment = create_action(move |comment: &NewComment| {
        let comment = comment.clone();
        async move {
            match section.api.get_value().post_comment(&comment).await {
                Ok(()) => {
                    log::debug!("Posted new comment");
                    set_message.set(String::new());
                    set_error.set(None);
                    section.reload();
                }
                Err(err) => {
                    log::warn!("Unable to post comment: {err}");
                    set_error.set(Some(format!("Unable to post comment: {err}")));
                }
            }
        }
    });
    let disabled = post_comment.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match name.with(|name| message.with(|message| new_comment(name, message))) {
            Ok(comment) => {
                post_comment.dispatch(comment);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
      <form id="comment-form" on:submit=on_submit>
        {move || error.get().map(|err| view! { <p class="comment-error">{ err }</p> })}
        <div class="input-field">
          <input
            id="comment-name"
            type="text"
            placeholder="Name"
            prop:value = move || name.get()
            prop:disabled = move || disabled.get()
            on:input = move |ev| set_name.set(event_target_value(&ev))
          />
        </div>
        <div class="input-field">
          <textarea
            id="comment-message"
            class="materialize-textarea"
            placeholder="Leave a comment"
            prop:value = move || message.get()
            prop:disabled = move || disabled.get()
            on:input = move |ev| set_message.set(event_target_value(&ev))
          ></textarea>
        </div>
        <button
          type="submit"
          class="waves-effect waves-light btn-small"
          prop:disabled = move || disabled.get()
        >
          "Submit"
        </button>
      </form>
    }
}
