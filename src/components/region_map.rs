use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Region;
use crate::utils::leaflet_ffi;
use crate::viewmodels::map_viewmodel::{prepare_markers, Layout};
use crate::viewmodels::DerivedStats;

const MAP_CONTAINER_ID: &str = "region-map";

#[derive(Properties, PartialEq)]
pub struct RegionMapProps {
    pub regions: Vec<Region>,
    pub stats: DerivedStats,
    pub layout: Layout,
}

/// Leaflet map with one circle per region. The container is mounted once;
/// later renders only push markers or ask Leaflet to resize.
#[function_component(RegionMap)]
pub fn region_map(props: &RegionMapProps) -> Html {
    use_effect_with((), |_| {
        leaflet_ffi::init_map(MAP_CONTAINER_ID, &CONFIG.map_config);
        leaflet_ffi::destroy_map
    });

    {
        let markers = prepare_markers(&props.regions, &props.stats);
        use_effect_with(markers, |markers| {
            log::debug!("📍 {} marcadores", markers.len());
            leaflet_ffi::render_markers(markers);
            || ()
        });
    }

    use_effect_with(props.layout, |_| {
        leaflet_ffi::invalidate_size();
        || ()
    });

    html! {
        <div id={MAP_CONTAINER_ID} class="region-map"></div>
    }
}
