// ============================================================================
// LEAFLET FFI - bindings to static/region_map.js
// ============================================================================
// Thin wrappers only. Styling is decided in `viewmodels::map_viewmodel`.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::MapConfig;
use crate::viewmodels::map_viewmodel::MapMarker;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = initRegionMap)]
    fn init_region_map(container_id: &str, options: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = renderRegionMarkers)]
    fn render_region_markers(markers: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = invalidateRegionMapSize)]
    fn invalidate_region_map_size() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = destroyRegionMap)]
    fn destroy_region_map() -> Result<(), JsValue>;
}

/// `message` of a thrown JS error, or its debug form
fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// True once the Leaflet script has defined `window.L`
fn leaflet_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("L")).ok())
        .unwrap_or(false)
}

pub fn init_map(container_id: &str, config: &MapConfig) {
    if !leaflet_loaded() {
        log::warn!("⚠️ Leaflet não carregado, mapa indisponível");
        return;
    }
    let options = match serde_wasm_bindgen::to_value(config) {
        Ok(options) => options,
        Err(e) => {
            log::error!("❌ Erro serializando opções do mapa: {}", e);
            return;
        }
    };
    log::info!("🗺️ Inicializando mapa em #{}", container_id);
    if let Err(e) = init_region_map(container_id, options) {
        log::error!("❌ initRegionMap falhou: {}", js_error_message(&e));
    }
}

/// Replaces every marker on the map
pub fn render_markers(markers: &[MapMarker]) {
    match serde_wasm_bindgen::to_value(markers) {
        Ok(value) => {
            if let Err(e) = render_region_markers(value) {
                log::error!("❌ renderRegionMarkers falhou: {}", js_error_message(&e));
            }
        }
        Err(e) => log::error!("❌ Erro serializando marcadores: {}", e),
    }
}

pub fn invalidate_size() {
    if let Err(e) = invalidate_region_map_size() {
        log::warn!("⚠️ invalidateRegionMapSize falhou: {}", js_error_message(&e));
    }
}

pub fn destroy_map() {
    if let Err(e) = destroy_region_map() {
        log::warn!("⚠️ destroyRegionMap falhou: {}", js_error_message(&e));
    }
}
