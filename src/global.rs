//! Package-level prompts on a shared, swappable console.
//!
//! The shared console is process state: swapping it affects every caller, so
//! code that needs isolation should hold its own [`Console`] instead.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::console::{Console, LineSource};
use crate::error::Result;

/// A console with type-erased ends, the shape of the shared instance.
pub type DynConsole = Console<Box<dyn LineSource + Send>, Box<dyn Write + Send>>;

fn stdio_console() -> DynConsole {
    Console::with_streams(
        Box::new(io::stdin()) as Box<dyn LineSource + Send>,
        Box::new(io::stdout()) as Box<dyn Write + Send>,
    )
}

fn shared() -> MutexGuard<'static, DynConsole> {
    static SHARED: OnceLock<Mutex<DynConsole>> = OnceLock::new();
    SHARED
        .get_or_init(|| Mutex::new(stdio_console()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replace the shared console, returning the one it replaces.
pub fn set_default(console: DynConsole) -> DynConsole {
    std::mem::replace(&mut *shared(), console)
}

/// Put a fresh stdin/stdout console back in place.
pub fn reset_default() -> DynConsole {
    set_default(stdio_console())
}

/// [`Console::get_input`] on the shared console.
pub fn get_input(prompt: &str) -> Result<String> {
    shared().get_input(prompt)
}

/// [`Console::get_confirm`] on the shared console.
pub fn get_confirm(prompt: &str, default_yes: bool) -> Result<bool> {
    shared().get_confirm(prompt, default_yes)
}

/// [`Console::get_password`] on the shared console.
pub fn get_password(prompt: &str) -> Result<String> {
    shared().get_password(prompt)
}
