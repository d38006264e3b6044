use leptos::prelude::*;
use leptos::task::spawn_local;
use lucide_leptos::{Activity, Bot, BrainCircuit, ChartColumn, FileText, FolderOpen, LogOut};
use web_sys::HtmlInputElement;

use breathscan::client::browser::{read_file, save_bytes};
use breathscan::client::{execute, BrowserBackend};
use breathscan::models::{MetricsMap, MODEL_CHOICES, REPORT_FILENAME};
use breathscan::presentation::{
    champion, diagnosis_color, display_model_name, format_accuracy, format_confidence, format_f1,
};
use breathscan::signals::DashboardSlices;
use breathscan::state::{Command, Dashboard, Outcome, Tab};

use crate::metrics_chart::MetricsChart;
use crate::panels::{ModelsPanel, PipelinePanel};

fn tab_icon(tab: Tab) -> AnyView {
    match tab {
        Tab::Analysis => view! { <Activity size=18 /> }.into_any(),
        Tab::Benchmarks => view! { <ChartColumn size=18 /> }.into_any(),
        Tab::Models => view! { <Bot size=18 /> }.into_any(),
        Tab::Pipeline => view! { <BrainCircuit size=18 /> }.into_any(),
    }
}

#[component]
pub fn DashboardView(user: String, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let dashboard = RwSignal::new(Dashboard::default());

    // Runs a command on the UI executor and hands the outcome back to its panel.
    let dispatch = Callback::new(move |command: Option<Command>| {
        let Some(command) = command else {
            return;
        };
        spawn_local(async move {
            let outcome = execute(&BrowserBackend::default(), command).await;
            let Some(bytes) = dashboard.try_update(|d| d.apply(outcome)).flatten() else {
                return;
            };
            if let Err(e) = save_bytes(REPORT_FILENAME, "application/pdf", &bytes) {
                dashboard.update(|d| {
                    d.apply(Outcome::ReportReady(Err(e)));
                });
            }
        });
    });

    let slices = DashboardSlices::new(dashboard);
    let active = slices.active;

    view! {
        <div class="flex flex-col h-[90vh] max-w-[1200px] mx-auto">
            // Top Navigation
            <nav class="glass-panel drop-in flex justify-between items-center px-8 py-4 mb-8 rounded-[20px]">
                <div class="flex items-center gap-4">
                    <h2 class="m-0 text-2xl font-bold">"BreathScan AI"</h2>
                    <span class="bg-[#ffafcc] px-3 py-0.5 rounded-[20px] text-xs text-white">{user}</span>
                </div>

                <div class="flex gap-4">
                    {Tab::ALL.into_iter().map(|tab| view! {
                        <button
                            id=format!("tab-{}", tab.id())
                            on:click=move |_| dispatch.run(dashboard.try_update(|d| d.select_tab(tab)).flatten())
                            class=move || format!(
                                "flex items-center gap-2 px-6 py-2 rounded-xl transition-all duration-200 {}",
                                if active.get() == tab { "tab-active" } else { "bg-transparent" }
                            )
                        >
                            {tab_icon(tab)}
                            <span>{tab.label()}</span>
                        </button>
                    }).collect_view()}
                    <button on:click=move |_| on_logout.run(()) class="flex items-center gap-2 bg-[#ffb3c1] text-white">
                        <LogOut size=18 />
                        "Logout"
                    </button>
                </div>
            </nav>

            // Main Content Area
            <div class="glass-panel flex-grow overflow-y-auto rounded-3xl p-12">
                {move || match active.get() {
                    Tab::Analysis => view! { <AnalysisPanelView dashboard=dashboard slices=slices dispatch=dispatch /> }.into_any(),
                    Tab::Benchmarks => view! { <BenchmarksPanelView metrics=slices.metrics /> }.into_any(),
                    Tab::Models => view! { <ModelsPanel /> }.into_any(),
                    Tab::Pipeline => view! { <PipelinePanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn AnalysisPanelView(
    dashboard: RwSignal<Dashboard>,
    slices: DashboardSlices,
    dispatch: Callback<Option<Command>>,
) -> impl IntoView {
    let (dragging, set_dragging) = signal(false);

    let load_file = move |file: web_sys::File| {
        spawn_local(async move {
            match read_file(file).await {
                Ok(upload) => dashboard.update(|d| d.analysis.select_file(upload)),
                Err(e) => log::error!("Could not read file: {e}"),
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_file(file);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            load_file(file);
        }
    };

    let loading = move || dashboard.with(|d| d.analysis.is_loading());
    let can_submit = move || dashboard.with(|d| d.analysis.can_submit());

    view! {
        <div class="max-w-[800px] mx-auto text-center">
            <h1 class="text-3xl font-bold mb-8">"Start New Diagnosis"</h1>

            <div class="grid grid-cols-3 gap-4 mb-6 text-left">
                <label class="flex flex-col gap-1 text-sm">
                    "Patient Name"
                    <input
                        type="text"
                        prop:value=move || dashboard.with(|d| d.analysis.patient().name.clone())
                        on:input=move |ev| dashboard.update(|d| d.analysis.set_patient_name(event_target_value(&ev)))
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    "Age"
                    <input
                        type="number"
                        min="0"
                        max="120"
                        prop:value=move || dashboard.with(|d| d.analysis.patient().age.to_string())
                        on:input=move |ev| {
                            if let Ok(age) = event_target_value(&ev).parse::<u32>() {
                                dashboard.update(|d| d.analysis.set_patient_age(age));
                            }
                        }
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    "Model Architecture"
                    <select
                        prop:value=move || dashboard.with(|d| d.analysis.model_name().to_string())
                        on:change=move |ev| dashboard.update(|d| d.analysis.select_model(event_target_value(&ev)))
                    >
                        {MODEL_CHOICES.into_iter().map(|m| view! {
                            <option value=m>{display_model_name(m)}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <div
                class=move || format!("dropzone {}", if dragging.get() { "dropzone-active" } else { "" })
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <input type="file" accept=".csv" class="hidden" id="file-upload" on:change=on_file />
                <label for="file-upload" class="cursor-pointer block">
                    <div class="flex justify-center mb-4 text-[#a2d2ff]"><FolderOpen size=64 /></div>
                    <h3 class="m-0 text-xl font-semibold">
                        {move || slices.file_name.get()
                            .unwrap_or_else(|| "Drag & Drop or Click to Upload CSV".to_string())}
                    </h3>
                    <p class="text-[#9a8c98]">"Supported format: .csv (Breath Sensor Data)"</p>
                </label>
            </div>

            <div class="mt-8">
                <button
                    on:click=move |_| dispatch.run(dashboard.try_update(|d| d.analysis.submit()).flatten())
                    disabled=move || !can_submit()
                    class=move || format!("text-lg px-12 py-4 {}", if loading() { "bg-[#ccc]" } else { "bg-[#a2d2ff]" })
                >
                    {move || if loading() { "Running AI Inference..." } else { "Run Analysis" }}
                </button>
            </div>

            {move || slices.error.get().map(|error| view! {
                <div class="fade-in mt-8 p-4 bg-[#ffe3e3] text-[#e03131] rounded-xl">{error}</div>
            })}

            {move || slices.prediction.get().map(|prediction| {
                let highlight = diagnosis_color(&prediction.diagnosis);
                view! {
                    <div class="pop-in mt-12 p-8 bg-white rounded-[20px] shadow-soft">
                        <h2 class="text-2xl font-bold">"Analysis Results"</h2>
                        <div class="grid grid-cols-2 gap-8 mt-8">
                            <div class="p-8 rounded-2xl" style=format!("background: {highlight}")>
                                <div class="text-sm uppercase tracking-wider">"Diagnosis"</div>
                                <div class="text-3xl font-bold">{prediction.diagnosis.clone()}</div>
                            </div>
                            <div class="p-8 rounded-2xl bg-[#f0efeb]">
                                <div class="text-sm uppercase tracking-wider">"Confidence Score"</div>
                                <div class="text-3xl font-bold">{format_confidence(prediction.confidence)}</div>
                            </div>
                        </div>
                        {prediction.model_used.clone().map(|model| view! {
                            <p class="mt-4 text-sm text-[#9a8c98]">"Model: " {display_model_name(&model)}</p>
                        })}
                        <div class="mt-8 text-center">
                            <button
                                on:click=move |_| dispatch.run(dashboard.try_update(|d| d.analysis.request_report()).flatten())
                                disabled=move || !dashboard.with(|d| d.analysis.can_download_report())
                                class="inline-flex items-center gap-2 bg-[#cdb4db]"
                            >
                                <FileText size=18 />
                                {move || if dashboard.with(|d| d.analysis.is_report_loading()) {
                                    "Generating Report..."
                                } else {
                                    "Download Clinical Report"
                                }}
                            </button>
                            {move || slices.report_error.get().map(|error| view! {
                                <div class="mt-4 text-sm text-[#e03131]">{error}</div>
                            })}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn BenchmarksPanelView(metrics: Memo<MetricsMap>) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"Model Performance Benchmarks"</h2>
            {move || metrics.with(|m| {
                champion(m).map(|(name, scores)| format!(
                    "Champion: {} ({} accuracy, F1 {})",
                    display_model_name(name),
                    format_accuracy(scores.accuracy),
                    format_f1(scores.f1_score),
                ))
            }).map(|summary| view! { <p class="mb-6 text-[#9a8c98]">{summary}</p> })}
            <MetricsChart metrics=metrics />
        </div>
    }
}
