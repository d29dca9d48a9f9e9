//! Counter dApp: create, find and increment on-chain counters

mod app;
mod ui;
mod views;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eyre::Result<()> {
    use counter_dapp_adapters::{AppConfig, MemoryFragment};
    use eframe::egui;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::from_env();
    // A share link (or bare counter id) can be passed as the first argument.
    let fragment = MemoryFragment::new(&std::env::args().nth(1).unwrap_or_default());
    tracing::info!(network = %config.network, "Starting counter-dapp");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Counter dApp")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "counter-dapp",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, fragment)))),
    )
    .map_err(|e| eyre::eyre!("eframe exited with error: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use counter_dapp_adapters::{AppConfig, BrowserFragment};
    use wasm_bindgen::JsCast;

    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("the_canvas_id"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            tracing::error!("canvas element the_canvas_id not found");
            return;
        };

        let config = AppConfig::from_env();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, BrowserFragment)))),
            )
            .await;
        if let Err(e) = result {
            tracing::error!(error = ?e, "failed to start counter-dapp");
        }
    });
}
