use crate::error::CoreError;

/// Blocking user-facing primitives of the host.
///
/// Implementations may be terminal prompts, native dialogs or scripted
/// answers. Each call returns only once the user has answered.
pub trait Platform {
    /// Yes/no question. `false` on cancel.
    fn confirm(&mut self, message: &str) -> bool;

    /// Free-text question. `None` on cancel.
    fn prompt_text(&mut self, message: &str) -> Option<String>;

    /// Show a message that needs no answer.
    fn notify(&mut self, message: &str);

    /// Hand a number to the native dialer.
    fn place_call(&mut self, number: &str) -> Result<(), CoreError>;
}
