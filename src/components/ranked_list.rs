use yew::prelude::*;

use crate::models::{Region, ViewMode};
use crate::viewmodels::regions_viewmodel::{ranked_list_title, top_regions, RANKED_LIST_SIZE};

#[derive(Properties, PartialEq)]
pub struct RankedListProps {
    pub regions: Vec<Region>,
    pub mode: ViewMode,
}

#[function_component(RankedList)]
pub fn ranked_list(props: &RankedListProps) -> Html {
    let top = top_regions(&props.regions, RANKED_LIST_SIZE);

    html! {
        <div class="ranked-list">
            <h3>{ranked_list_title(props.mode)}</h3>
            if top.is_empty() {
                <p class="empty">{"Nenhum dado disponível."}</p>
            } else {
                <ol>
                    { for top.iter().map(|region| html! {
                        <li>
                            <span class="region-name">{&region.name}</span>
                            <span class="region-accesses">{format!("{} acessos", region.accesses)}</span>
                        </li>
                    }) }
                </ol>
            }
        </div>
    }
}
