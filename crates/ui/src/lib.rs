mod app;
mod measure;
mod renderer;

pub use app::WalkthroughApp;
pub use measure::GalleyMeasurer;
pub use renderer::paint_scene;

/// Run the demo walkthrough in a native window.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native_demo() -> eframe::Result<()> {
    eframe::run_native(
        "limelight demo",
        eframe::NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(WalkthroughApp::new(cc)))),
    )
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Redirect panics to console
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("limelight_canvas")
            .expect("no canvas element with id 'limelight_canvas'")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("element is not a canvas");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(WalkthroughApp::new(cc)))),
            )
            .await;
        if let Err(e) = start_result {
            web_sys::console::error_1(&format!("Failed to start eframe: {e:?}").into());
        }
    });
    Ok(())
}
