use leptos::*;

use portfolio_frontend::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start comment section");
    mount_to_body(|| view! { <App /> });
}
