//! Closer App — WASM entry point.
//!
//! This crate is the composition root. It reads the host page's config,
//! builds the negotiation session, and hands it to the egui UI.

mod app;

pub use app::{load_config, CloserApp, ShellAction};


#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::{load_config, CloserApp};

    const CANVAS_ID: &str = "closer_canvas";

    /// WASM entry point — called from index.html
    #[wasm_bindgen(start)]
    pub async fn main() {
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("Closer WASM starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No window or document; cannot start");
            return;
        };
        let canvas = match document
            .get_element_by_id(CANVAS_ID)
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            Some(Err(_)) => {
                log::error!("Element '{}' is not a canvas", CANVAS_ID);
                return;
            }
            None => {
                log::error!("No canvas element with id '{}'", CANVAS_ID);
                return;
            }
        };

        let config = load_config(canvas.get_attribute("data-config").as_deref());
        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async move {
            let started = eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |_cc| Ok(Box::new(CloserApp::new(config)))),
                )
                .await;
            if let Err(e) = started {
                log::error!("Failed to start eframe: {:?}", e);
            }
        });
    }
}
