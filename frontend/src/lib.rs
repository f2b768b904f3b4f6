//! imgdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that uploads one image straight to the hosted
//! image service and shows the returned thumbnail.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                   App                    │
//! ├──────────────────────────────────────────┤
//! │  UploadWidget                            │
//! │  ├── "Uploading..." or icon + <input>    │
//! │  ├── error message (when set)            │
//! │  └── thumbnail (when a URL is known)     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Page-level constants
//! - [`store`] - Signal-backed view state
//! - [`components`] - UI components
//! - [`services`] - Browser transport to the image service

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod store;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use store::SignalStore;
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 imgdrop - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadWidget/>
                </Routes>
            </main>
        </Router>
    }
}
