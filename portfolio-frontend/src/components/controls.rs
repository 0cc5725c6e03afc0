use leptos::*;
use strum::IntoEnumIterator;

use portfolio_core::entities::query::{MaxComments, SortType};

use crate::CommentSection;

/// Selects the page size and order of the comment list.
#[component]
pub fn CommentControls(section: CommentSection) -> impl IntoView {
    let query = section.query;

    let max_comments_options = MaxComments::iter()
        .map(|max| {
            view! {
              <option
                value = max.to_string()
                prop:selected = move || query.with(|q| q.max_comments == max)
              >
                { max.label() }
              </option>
            }
        })
        .collect_view();

    let sort_type_options = SortType::iter()
        .map(|sort| {
            view! {
              <option
                value = sort.as_ref().to_owned()
                prop:selected = move || query.with(|q| q.sort_type == sort)
              >
                { sort.label() }
              </option>
            }
        })
        .collect_view();

    view! {
      <div id="comment-controls" class="row">
        <div class="input-field col s6">
          <select
            id="max-comments"
            class="browser-default"
            on:change = move |ev| {
                match event_target_value(&ev).parse::<MaxComments>() {
                    Ok(max) => query.update(|q| q.max_comments = max),
                    Err(err) => log::warn!("{err}"),
                }
            }
          >
            { max_comments_options }
          </select>
          <label for="max-comments" class="active">"Comments per page"</label>
        </div>
        <div class="input-field col s6">
          <select
            id="sort-type"
            class="browser-default"
            on:change = move |ev| {
                match event_target_value(&ev).parse::<SortType>() {
                    Ok(sort) => query.update(|q| q.sort_type = sort),
                    Err(err) => log::warn!("Unsupported sort type: {err}"),
                }
            }
          >
            { sort_type_options }
          </select>
          <label for="sort-type" class="active">"Sort by"</label>
        </div>
      </div>
    }
}
