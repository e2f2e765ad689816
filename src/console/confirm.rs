use crate::error::{Error, Result};

/// The hint appended to a confirmation prompt; the capital letter marks the default.
pub fn confirm_suffix(default_yes: bool) -> &'static str {
    if default_yes {
        " [Y/n]: "
    } else {
        " [y/N]: "
    }
}

/// Classify an already trimmed answer.
///
/// An empty answer takes the default. Only y, yes, n and no are accepted, in
/// any ASCII case; anything else is [`Error::InvalidConfirmation`].
pub fn parse_confirmation(answer: &str, default_yes: bool) -> Result<bool> {
    if answer.is_empty() {
        return Ok(default_yes);
    }

    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(Error::InvalidConfirmation),
    }
}
