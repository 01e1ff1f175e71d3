// ============================================================================
// DASHBOARD - most accessed cities/states on a map plus a top-10 list
// ============================================================================

use yew::prelude::*;

use crate::components::{RankedList, RegionMap};
use crate::config::CONFIG;
use crate::hooks::{use_regions_poller, use_viewport_width};
use crate::models::ViewMode;
use crate::viewmodels::map_viewmodel::Layout;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let poller = use_regions_poller();
    let width = use_viewport_width();
    let layout = Layout::for_width(width, CONFIG.mobile_breakpoint_px);
    let state = poller.state.clone();

    let last_updated = state
        .last_updated
        .map(|t| {
            t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string()
        })
        .unwrap_or_else(|| "—".to_string());

    html! {
        <div class="page dashboard">
            <h3>{"Regiões mais acessadas"}</h3>
            <div class="mode-switch">
                { for ViewMode::all().into_iter().map(|mode| {
                    let class = classes!("btn", if mode == state.view_mode { "btn-primary" } else { "btn-default" });
                    html! {
                        <button {class} onclick={poller.set_view_mode.reform(move |_| mode)}>
                            {mode.button_label()}
                        </button>
                    }
                }) }
                <span class="last-updated">{format!("Atualizado às {}", last_updated)}</span>
            </div>
            <div class="dashboard-body" style={format!("display: flex; flex-direction: {};", layout.flex_direction())}>
                <RegionMap regions={state.regions.clone()} stats={state.stats.clone()} {layout} />
                <RankedList regions={state.regions.clone()} mode={state.view_mode} />
            </div>
        </div>
    }
}
