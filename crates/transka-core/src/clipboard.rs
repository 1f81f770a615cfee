/// Destination for finished translations.
pub trait ClipboardSink {
    /// Places `text` on the clipboard.
    ///
    /// Fire-and-forget: implementations log failures instead of returning
    /// them, since the workflow has nothing useful to do about them.
    fn copy(&mut self, text: &str);
}
