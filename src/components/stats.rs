use leptos::html;
use leptos::prelude::*;

use crate::behaviors::{parse_target, CounterAnimation, CounterReplay};
use crate::timer::RepeatingTimer;

/// One stat in the bouncing stats row. `target` is rendered verbatim as the
/// `data-target` attribute.
#[derive(Debug, Clone, Copy)]
pub struct StatBlock {
    pub target: &'static str,
    pub label: &'static str,
}

/// Signals and timer behind a single `.count-number`
#[derive(Clone, Copy)]
struct Counter {
    text: RwSignal<String>,
    animated: RwSignal<bool>,
    animating: RwSignal<bool>,
    animation: StoredValue<CounterAnimation>,
    timer: RepeatingTimer,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl Counter {
    fn new(target: u32) -> Self {
        Self {
            text: RwSignal::new("0".to_string()),
            animated: RwSignal::new(false),
            animating: RwSignal::new(false),
            animation: StoredValue::new(CounterAnimation::new(target)),
            timer: RepeatingTimer::new(),
        }
    }

    fn reset(&self) {
        self.timer.stop();
        self.animation.update_value(CounterAnimation::reset);
        self.text.set("0".to_string());
        self.animated.set(false);
        self.animating.set(false);
    }

    fn start(&self) {
        use crate::behaviors::counter::COUNTER_TICK_MS;
        use std::time::Duration;

        self.reset();
        self.animated.set(true);
        self.animating.set(true);

        let Counter {
            text,
            animation,
            timer,
            ..
        } = *self;
        timer.start(Duration::from_millis(COUNTER_TICK_MS), move || {
            let Some(frame) = animation.try_update_value(|a| a.tick()) else {
                timer.stop();
                return;
            };
            text.set(frame.text);
            if frame.done {
                timer.stop();
            }
        });
    }
}

/// Stats row whose blocks slide in once and whose counters count up each time
/// the row scrolls into view.
#[component]
pub fn StatsSection(
    blocks: Vec<StatBlock>,
    #[prop(optional)] replay: CounterReplay,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let counters: Vec<Counter> = blocks
        .iter()
        .map(|b| Counter::new(parse_target(Some(b.target))))
        .collect();
    let revealed: Vec<RwSignal<bool>> = blocks.iter().map(|_| RwSignal::new(false)).collect();

    #[cfg(feature = "hydrate")]
    {
        use crate::behaviors::stats::STATS_THRESHOLD;
        use crate::behaviors::{BounceStats, StatsAction};
        use crate::dom::{observe_visibility, ObserverOptions};
        use std::time::Duration;

        let machine = StoredValue::new(BounceStats::with_replay(blocks.len(), replay));
        let counters = StoredValue::new(counters.clone());
        let revealed = StoredValue::new(revealed.clone());

        let start_all = move |epoch: u64| {
            if machine.with_value(|m| m.is_current(epoch)) {
                counters.with_value(|cs| cs.iter().for_each(Counter::start));
            }
        };

        let apply = move |action: StatsAction| match action {
            StatsAction::RevealBlock { index, delay_ms } => {
                if let Some(block) = revealed.with_value(|r| r.get(index).copied()) {
                    set_timeout(move || block.set(true), Duration::from_millis(delay_ms));
                }
            }
            StatsAction::ResetCounters => {
                counters.with_value(|cs| cs.iter().for_each(Counter::reset));
            }
            StatsAction::StartCounters { delay_ms: 0, epoch } => start_all(epoch),
            StatsAction::StartCounters { delay_ms, epoch } => {
                set_timeout(move || start_all(epoch), Duration::from_millis(delay_ms));
            }
        };

        Effect::new(move |_| {
            let Some(el) = node.get() else {
                return;
            };
            observe_visibility(&el, ObserverOptions::threshold(STATS_THRESHOLD), move |visible| {
                let actions = machine
                    .try_update_value(|m| m.on_visibility(visible))
                    .unwrap_or_default();
                actions.into_iter().for_each(apply);
            });
        });

        on_cleanup(move || counters.with_value(|cs| cs.iter().for_each(|c| c.timer.stop())));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = replay;

    view! {
        <div node_ref=node class="stats-container">
            {blocks
                .into_iter()
                .zip(counters)
                .zip(revealed)
                .map(|((block, counter), shown)| {
                    view! {
                        <div class="bounce-stat-block" class=("fade-in-right", move || shown.get())>
                            <span
                                class="count-number"
                                class:animated=move || counter.animated.get()
                                class:animating=move || counter.animating.get()
                                data-target=block.target
                            >
                                {move || counter.text.get()}
                            </span>
                            <p class="stat-label">{block.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
