// ============================================================================
// USE REGIONS POLLER - live access counters for the dashboard
// ============================================================================
// Fetches immediately, then on every tick of an Interval. The interval is
// rebuilt whenever the view mode changes and dropped on unmount.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::ViewMode;
use crate::services::ApiClient;
use crate::viewmodels::{FetchTicket, PollerAction, PollerState};

#[derive(Clone)]
pub struct UseRegionsPollerHandle {
    pub state: Rc<PollerState>,
    pub set_view_mode: Callback<ViewMode>,
}

#[hook]
pub fn use_regions_poller() -> UseRegionsPollerHandle {
    let state = use_reducer(PollerState::default);
    // Strictly increasing for the lifetime of the dashboard
    let seq = use_mut_ref(|| 0u64);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    let fetch_snapshot = {
        let dispatcher = state.dispatcher();
        let seq = seq.clone();
        Rc::new(move |mode: ViewMode, generation: u64| {
            let ticket_seq = {
                let mut counter = seq.borrow_mut();
                *counter += 1;
                *counter
            };
            let ticket = FetchTicket { mode, generation, seq: ticket_seq };
            let dispatcher = dispatcher.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().regions_report().await {
                    Ok(report) => dispatcher.dispatch(PollerAction::SnapshotLoaded {
                        ticket,
                        report,
                        received_at: chrono::Utc::now(),
                    }),
                    Err(e) => log::warn!("⚠️ Falha ao buscar relatório #{}: {}", ticket.seq, e),
                }
            });
        })
    };

    {
        let interval_handle = interval_handle.clone();
        use_effect_with((state.view_mode, state.generation), move |(mode, generation)| {
            let (mode, generation) = (*mode, *generation);
            *interval_handle.borrow_mut() = None;

            log::info!(
                "⏰ Atualizando {} a cada {} ms",
                mode.key(),
                CONFIG.poll_interval_ms
            );
            fetch_snapshot(mode, generation);

            let tick = fetch_snapshot.clone();
            let interval = Interval::new(CONFIG.poll_interval_ms, move || tick(mode, generation));
            *interval_handle.borrow_mut() = Some(interval);

            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    let set_view_mode = {
        let dispatcher = state.dispatcher();
        Callback::from(move |mode: ViewMode| dispatcher.dispatch(PollerAction::SetViewMode(mode)))
    };

    UseRegionsPollerHandle { state: Rc::new((*state).clone()), set_view_mode }
}
