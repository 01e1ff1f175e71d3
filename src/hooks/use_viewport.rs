use gloo_events::EventListener;
use yew::prelude::*;

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current `window.innerWidth`, re-read on every resize event
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(window_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| width.set(window_width()))
            });
            // dropping the listener unregisters it
            move || drop(listener)
        });
    }

    *width
}
