pub const CONFIRM_DELETE: &str = "Are you sure?";
pub const EMPTY_CONTENT: &str = "Please provide at least some content (text or media)";

/// Blocking prompts shown to the user.
pub trait Dialog {
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}
