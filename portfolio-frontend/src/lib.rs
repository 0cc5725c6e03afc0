use leptos::*;

use portfolio_core::{
    entities::{login::LoginStatus, query::CommentQuery},
    CommentListView, LoadRequest,
};
use portfolio_frontend_api::CommentApi;

mod components;
use components::*;

mod config;
pub use config::*;

mod section;
pub use section::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let Config { api_url, viewer } = Config::from_environment();
    log::debug!("Comment API: {api_url:?}, viewer: {viewer:?}");

    // -- signals -- //

    let api = store_value(CommentApi::new(api_url));
    let view_model = RwSignal::new(CommentListView::new(viewer));
    let query = RwSignal::new(Preferences::load().query());
    let notice = RwSignal::new(None::<String>);
    let login_status = RwSignal::new(None::<LoginStatus>);
    let logged_in = Signal::derive(move || {
        login_status.with(|s| s.as_ref().is_some_and(LoginStatus::is_logged_in))
    });

    // -- actions -- //

    let load = Action::new(move |query: &CommentQuery| {
        let request = view_model.try_update(|vm| vm.begin_load(*query));
        async move {
            let Some(LoadRequest { ticket, query }) = request else {
                return;
            };
            let result = api.get_value().comments(&query).await;
            view_model.update(|vm| {
                vm.finish_load(ticket, result);
            });
        }
    });

    let fetch_login_status = Action::new(move |()| async move {
        match api.get_value().login_status().await {
            Ok(status) => {
                log::debug!("Logged in: {}", status.is_logged_in());
                login_status.set(Some(status));
            }
            Err(err) => {
                log::error!("Unable to fetch login status: {err}");
            }
        }
    });

    let section = CommentSection {
        api,
        view_model,
        query,
        notice,
        load,
    };

    fetch_login_status.dispatch(());

    // -- effects -- //

    Effect::new(move |_| {
        let query = query.get();
        Preferences::from(query).save();
        load.dispatch(query);
    });

    view! {
      <section id="comment-section">
        <LoginBar status = login_status.into() />
        <Show when = move || logged_in.get() fallback = || view! {}>
          <CommentForm section />
        </Show>
        <CommentControls section />
        <Notice section />
        <CommentList section />
      </section>
    }
}
