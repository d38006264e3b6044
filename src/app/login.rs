use leptos::prelude::*;
use leptos::task::spawn_local;

use breathscan::client::{execute, BrowserBackend};
use breathscan::state::{LoginForm, Outcome};

#[component]
pub fn Login(#[prop(into)] on_login: Callback<String>) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let loading = move || form.with(LoginForm::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(command) = form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            if let Outcome::LoggedIn(result) = execute(&BrowserBackend::default(), command).await {
                if let Some(user) = form.try_update(|f| f.apply(result)).flatten() {
                    on_login.run(user);
                }
            }
        });
    };

    view! {
        <div class="flex justify-center items-center h-[80vh]">
            <div class="glass-panel rise-in w-full max-w-[400px] text-center">
                <h1 class="text-3xl font-bold text-[#ffafcc] mb-2">"🫁 BreathScan AI"</h1>
                <h3 class="mt-0 opacity-80 font-medium">"Clinical Triage System"</h3>

                <form on:submit=on_submit class="flex flex-col gap-4 mt-8">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />

                    {move || form.with(|f| f.error().map(str::to_string)).map(|error| view! {
                        <div class="text-[#ff6b6b] text-sm">{error}</div>
                    })}

                    <button type="submit" disabled=loading>
                        {move || if loading() { "Verifying..." } else { "Login" }}
                    </button>
                </form>

                <div class="mt-8 text-xs opacity-70">"Demo: doctor / doctor123"</div>
            </div>
        </div>
    }
}
