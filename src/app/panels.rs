use leptos::prelude::*;

use breathscan::presentation::{MODEL_DESCRIPTIONS, PIPELINE_STEPS};

#[component]
pub fn ModelsPanel() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"AI Model Architectures"</h2>
            <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-8">
                {MODEL_DESCRIPTIONS.into_iter().map(|(title, subtitle, description, accent)| view! {
                    <div class="lift-in p-8 bg-white rounded-[20px] shadow-soft border-t-4" style=format!("border-top-color: {accent}")>
                        <h3 class="mt-0 text-xl font-semibold">{title}</h3>
                        <h4 class="text-[#9a8c98] font-medium">{subtitle}</h4>
                        <p class="leading-relaxed">{description}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn PipelinePanel() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"🧠 Training Pipeline Flow"</h2>
            <div class="flex flex-col gap-6">
                {PIPELINE_STEPS.into_iter().map(|step| view! {
                    <div class="slide-right flex gap-6 items-start p-6 bg-white rounded-[20px] shadow-soft">
                        <div
                            class="flex-shrink-0 w-12 h-12 rounded-full flex items-center justify-center text-white font-bold text-lg"
                            style:background=step.accent
                        >
                            {step.number}
                        </div>
                        <div class="text-left">
                            <h3 class="mt-0 text-xl font-semibold">{step.title}</h3>
                            <h4 class="text-[#9a8c98] font-medium">{step.subtitle}</h4>
                            {if step.details.len() == 1 {
                                view! { <p>{step.details[0]}</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="list-disc pl-5">
                                        {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
