use leptos::*;

use crate::CommentSection;

/// Reports a failed interaction until it is dismissed.
#[component]
pub fn Notice(section: CommentSection) -> impl IntoView {
    let notice = section.notice;

    move || {
        notice.get().map(|msg| {
            view! {
              <div class="card-panel red lighten-4 comment-notice">
                <span>{ msg }</span>
                <a href="#" class="right" on:click = move |ev| {
                    ev.prevent_default();
                    notice.set(None);
                }>
                  <i class="material-icons">"close"</i>
                </a>
              </div>
            }
        })
    }
}
