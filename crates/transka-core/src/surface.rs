use crate::LanguagePair;

/// Visual weight of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// Work in progress, e.g. a pending translation.
    Working,
    /// Something completed.
    Success,
    /// Nothing went wrong, but nothing happened either.
    Warning,
    /// A failure the user should look at.
    Error,
}

/// The window (or stand-in) the workflow reads from and writes to.
///
/// Every method is called from the workflow's UI execution context only.
pub trait PresentationSurface {
    /// Current contents of the input region.
    fn input_text(&self) -> String;

    /// Replaces the output region.
    fn set_output_text(&mut self, text: &str);

    /// Current contents of the output region.
    fn output_text(&self) -> String;

    /// Empties the input region.
    fn clear_input(&mut self);

    /// Empties the output region.
    fn clear_output(&mut self);

    /// Updates the status indicator.
    fn set_status(&mut self, text: &str, severity: Severity);

    /// Reveals the surface.
    fn show(&mut self);

    /// Hides the surface.
    fn hide(&mut self);

    /// Moves keyboard focus into the input region.
    fn focus_input(&mut self);

    /// Raises a notification the user cannot miss.
    fn notify(&mut self, title: &str, message: &str);

    /// Displays the active language pair.
    fn set_languages(&mut self, languages: &LanguagePair);
}
