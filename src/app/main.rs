//! Browser entry point for the BreathScan dashboard.

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod metrics_chart;
#[cfg(target_arch = "wasm32")]
mod panels;

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use breathscan::state::Session;

#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> impl IntoView {
    let session = RwSignal::new(Session::default());
    let on_login = Callback::new(move |user: String| session.update(|s| s.log_in(user)));
    let on_logout = Callback::new(move |_: ()| session.update(|s| s.log_out()));

    view! {
        <div class="relative w-full min-h-screen text-[#4a4e69]">
            <background::Background />

            <div class="relative z-10 p-8">
                {move || match session.with(|s| s.user().map(str::to_string)) {
                    None => view! { <login::Login on_login=on_login /> }.into_any(),
                    Some(user) => view! {
                        <dashboard::DashboardView user=user on_logout=on_logout />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    let debug_enabled = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("debug_enabled").ok().flatten())
        .is_some_and(|v| v == "true");

    let level = if debug_enabled {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("breathscan-app runs in the browser; build it with `trunk build`.");
}
