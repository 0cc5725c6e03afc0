use leptos::*;

use portfolio_core::entities::login::LoginStatus;

#[component]
pub fn LoginBar(status: Signal<Option<LoginStatus>>) -> impl IntoView {
    move || {
        status.get().map(|status| match status {
            LoginStatus::LoggedIn { logout_url } => view! {
              <div id="login-bar">
                <ButtonLink button_id="logout-button" href=logout_url label="Logout" />
              </div>
            },
            LoginStatus::LoggedOut { login_url } => view! {
              <div id="login-bar">
                <p>"Please login to write comments."</p>
                <ButtonLink button_id="login-button" href=login_url label="Login" />
              </div>
            },
        })
    }
}

#[component]
fn ButtonLink(button_id: &'static str, href: String, label: &'static str) -> impl IntoView {
    view! {
      <a id=button_id class="waves-effect waves-light btn-small" href=href>{ label }</a>
    }
}
