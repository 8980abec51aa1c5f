//! A small veneer over the Win32 windowing API.
//!
//! One call creates a window whose events are routed to the methods of a
//! [`MessageHandler`] implementation: paint, keyboard, mouse and close each
//! have an overridable no-op handler, and everything else goes through a
//! catch-all hook. Two message pumps are provided, a blocking one and a
//! non-blocking one, both driven by a caller-owned loop.
//!
//! ```ignore
//! use winapp::{AppWindow, MessageHandler, WindowOptions};
//!
//! #[derive(Default)]
//! struct App;
//!
//! impl MessageHandler for App {
//!     fn on_key_down(&mut self, key: u64) {
//!         log::info!("key down: {:#x}", key);
//!     }
//! }
//!
//! fn main() -> Result<(), winapp::PlatformError> {
//!     let window = AppWindow::create("MyApp", App, WindowOptions::default())?;
//!     while window.wait_message()? {}
//!     Ok(())
//! }
//! ```
//!
//! The model is single threaded and cooperative: the thread that creates the
//! window owns its message queue and must be the one calling the pumps.
//!
//! Only the pure layers (message classification, options, error values)
//! compile off Windows; the window and pump surface is Windows only.

mod config;
mod error;
mod event;
pub mod logging;
#[cfg(windows)]
mod paint;
#[cfg(windows)]
mod window;

pub use config::WindowOptions;
pub use error::PlatformError;
pub use event::{MouseButton, WindowEvent};
#[cfg(windows)]
pub use paint::Paint;
#[cfg(windows)]
pub use window::{AppWindow, MessageHandler};
