use crate::CoreResult;

/// A text translation backend.
///
/// Calls may block on network or process I/O for seconds; the workflow only
/// ever invokes a translator from the blocking worker pool, never from the
/// UI context.
pub trait Translator: Send + Sync + 'static {
    /// Translates `text` from `source_lang` into `target_lang`.
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> CoreResult<String>;

    /// Whether the backend has what it needs (credentials, a command) to run.
    fn is_configured(&self) -> bool {
        true
    }

    /// Human-readable backend name for logs and status.
    fn service_name(&self) -> &str;
}
