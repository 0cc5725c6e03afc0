use leptos::*;

use portfolio_core::{entities::id::CommentId, CommentFragment};

use crate::CommentSection;

/// A single comment of the list.
///
/// The markup is rebuilt from the fragment whenever the view model
/// changes the state of this comment.
#[component]
pub fn CommentItem(id: CommentId, section: CommentSection) -> impl IntoView {
    let view_model = section.view_model;
    let fragment = create_memo(move |_| view_model.with(|vm| vm.fragment(id)));

    move || fragment.get().map(|fragment| view! { <CommentBody fragment section /> })
}

#[component]
fn CommentBody(fragment: CommentFragment, section: CommentSection) -> impl IntoView {
    let CommentFragment {
        id,
        name,
        email,
        date,
        message,
        translate,
        can_delete,
        like,
    } = fragment;

    let email = email.map(|email| view! { <span class="comment-email">{ email }</span> });

    let translate = translate.map(|translate| {
        view! {
          <a
            href="#"
            class="translate-comment"
            class:translated = translate.translated
            class:disabled = translate.pending
            on:click = move |ev| {
                ev.prevent_default();
                section.translate(id);
            }
          >
            { translate.label }
          </a>
        }
    });

    let delete = can_delete.then(|| {
        view! {
          <a
            href="#"
            class="delete-comment"
            title="Delete"
            on:click = move |ev| {
                ev.prevent_default();
                section.delete(id);
            }
          >
            <i class="material-icons">"delete"</i>
          </a>
        }
    });

    view! {
      <div class="comment" id = format!("comment-{id}")>
        <div class="comment-header">
          <span class="comment-name">{ name }</span>
          { email }
          <span class="comment-date">{ date }</span>
          { delete }
        </div>
        <p class="comment-message">{ message }</p>
        <div class="comment-footer">
          { translate }
          <div class="smile-container">
            <button
              class="smile-button"
              class:pending = like.pending
              on:click = move |_| section.toggle_like(id)
            >
              <i class="material-icons" class:press = like.liked>"emoji_emotions"</i>
            </button>
            <span class="num-likes">{ like.count }</span>
          </div>
        </div>
      </div>
    }
}
