use dioxus::prelude::*;
use todoc::components::App as TodocApp;

const MAIN_CSS: Asset = asset!("/assets/todoc.css");

/// Initialize Chrome tracing for performance profiling.
/// Returns a guard that must be held until program exit to flush the trace file.
///
/// Only spans from todoc and todoc_core are traced; dioxus internals are
/// filtered out.
#[cfg(feature = "profile")]
fn init_profiling() -> tracing_chrome::FlushGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let trace_filter = EnvFilter::new("todoc=trace,todoc_core=trace");

    let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
        .file("./trace.json")
        .include_args(true)
        .build();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::new("todoc=info,todoc_core=info"));

    tracing_subscriber::registry()
        .with(chrome_layer.with_filter(trace_filter))
        .with(console_layer)
        .init();

    dioxus::logger::tracing::info!("Profiling enabled - trace will be written to ./trace.json");
    guard
}

fn main() {
    #[cfg(feature = "profile")]
    let _profiling_guard = init_profiling();

    #[cfg(not(feature = "profile"))]
    {
        // DEBUG for development builds, INFO for release builds
        #[cfg(debug_assertions)]
        let level = dioxus::logger::tracing::Level::DEBUG;
        #[cfg(not(debug_assertions))]
        let level = dioxus::logger::tracing::Level::INFO;

        if let Err(e) = dioxus::logger::init(level) {
            eprintln!("logger failed to init: {e}");
        }
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        // Phone-shaped window; the layout is designed for mobile
        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("todoc")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(430.0, 900.0))
                .with_min_inner_size(LogicalSize::new(360.0, 640.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "mobile")]
    {
        dioxus::LaunchBuilder::mobile().launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }

        // asset! stylesheets don't load reliably on desktop, inline them there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/todoc.css")} }
        }

        TodocApp {}
    }
}
