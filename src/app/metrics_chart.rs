use leptos::prelude::*;

use breathscan::models::MetricsMap;
use breathscan::presentation::{metric_cards, MetricCard, BABY_PINK, NO_METRICS_MESSAGE, SKY_BLUE};

fn score_bar(label: &'static str, value: String, width: String, color: &'static str) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-2">
                <span>{label}</span>
                <span class="font-bold">{value}</span>
            </div>
            <div class="h-2.5 bg-[#f0f0f0] rounded-[5px]">
                <div class="bar-grow h-full rounded-[5px]" style:width=width style:background=color></div>
            </div>
        </div>
    }
}

fn card_view(card: MetricCard) -> impl IntoView {
    view! {
        <div class="slide-up p-8 bg-white rounded-[20px] shadow-soft" data-model=card.model>
            <h3 class="mt-0 text-xl font-semibold">{card.title}</h3>
            {score_bar("Accuracy", card.accuracy_label, card.accuracy_width, SKY_BLUE)}
            {score_bar("F1 Score", card.f1_label, card.f1_width, BABY_PINK)}
        </div>
    }
}

/// Accuracy and F1 bars for every benchmarked model. The cards are rebuilt
/// whenever a fetch brings a different mapping.
#[component]
pub fn MetricsChart(#[prop(into)] metrics: Signal<MetricsMap>) -> impl IntoView {
    move || {
        let cards = metrics.with(metric_cards);
        if cards.is_empty() {
            return view! { <p class="text-[#9a8c98]">{NO_METRICS_MESSAGE}</p> }.into_any();
        }
        view! {
            <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-8">
                {cards.into_iter().map(card_view).collect_view()}
            </div>
        }
        .into_any()
    }
}
