//! Small terminal prompts: read a line, ask yes/no, read a password without echo.
//!
//! ```no_run
//! use microconsole::Console;
//!
//! let mut console = Console::new();
//! let name = console.get_input("Name: ")?;
//! if console.get_confirm(&format!("Greet {}?", name), true)? {
//!     println!("Hello, {}!", name);
//! }
//! # Ok::<(), microconsole::Error>(())
//! ```

pub mod console;
pub mod error;
pub mod global;

// Re-export commonly used items
pub use console::{Console, LineSource};
pub use error::{Error, Result};
pub use global::{get_confirm, get_input, get_password, reset_default, set_default, DynConsole};
