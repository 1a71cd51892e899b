use yew::prelude::*;

use window_resize::components::{PanelMonitor, ResizeMonitor};
use window_resize::config::Config;
use window_resize::hooks::use_window_size;
use window_resize::models::{ResizeOptions, ResizeType};
use window_resize::utils::logger;

#[function_component(App)]
fn app() -> Html {
    let viewport = use_window_size(ResizeOptions::new().with_verify_dimensions(true));

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Window Resize Filter"}</h1>
                <p>{format!("Viewport: {viewport}")}</p>
            </header>

            <main class="app-main">
                <ResizeMonitor
                    label="Every notification"
                    options={ResizeOptions::new()}
                />
                <ResizeMonitor
                    label="Debounced"
                    options={ResizeOptions::new().with_timeout(Config::DEMO_TIMEOUT_MS)}
                />
                <ResizeMonitor
                    label="Width changes over 50px"
                    options={ResizeOptions::new().with_type(ResizeType::Width).with_diff_width(50)}
                />
                <ResizeMonitor
                    label="Breakpoints"
                    options={ResizeOptions::new()
                        .with_type(ResizeType::Width)
                        .with_step_width(Config::DEMO_WIDTH_STEPS)
                        .with_timeout(Config::DEMO_TIMEOUT_MS)}
                />
                <PanelMonitor
                    label="Resizable panel"
                    options={ResizeOptions::new().with_diff_width(10).with_diff_height(10)}
                />
            </main>
        </div>
    }
}

fn main() {
    if let Err(e) = logger::init(log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("Logging disabled: {e}").into());
    }
    yew::Renderer::<App>::new().render();
}
