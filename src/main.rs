use osce_intro::OsceApp;
use osce_intro::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
const WINDOW_TITLE: &str = "An introduction to OSCEs";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("osce_intro=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let app = OsceApp::from_config(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([960.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}

// Web entry point: mounts on the `the_canvas_id` canvas in index.html.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let app = match OsceApp::from_config(&AppConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("could not load course content: {e}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to attach to");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("canvas `the_canvas_id` not found");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
