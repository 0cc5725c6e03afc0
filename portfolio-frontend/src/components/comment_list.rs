use leptos::*;

use crate::CommentSection;

use super::CommentItem;

#[component]
pub fn CommentList(section: CommentSection) -> impl IntoView {
    let view_model = section.view_model;

    let ids = create_memo(move |_| view_model.with(|vm| vm.ids()));
    let error = create_memo(move |_| view_model.with(|vm| vm.error().map(ToOwned::to_owned)));
    let placeholder = create_memo(move |_| view_model.with(|vm| vm.placeholder()));
    let loading = create_memo(move |_| view_model.with(|vm| vm.is_loading()));

    view! {
      <div id="comment-list" class:loading = move || loading.get()>
        {move || error.get().map(|err| view! { <p class="comment-error">{ err }</p> })}
        {move || placeholder.get().map(|msg| view! { <p class="comment-placeholder">{ msg }</p> })}
        <For
          each = move || ids.get()
          key = |id| *id
          children = move |id| view! { <CommentItem id section /> }
        />
      </div>
    }
}
