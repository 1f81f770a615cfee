//! Remembering and restoring the window that had focus before us.

/// Opaque reference to a previously focused window.
///
/// Lives for one show/hide cycle. An empty token restores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusToken(Option<isize>);

impl FocusToken {
    /// Token that refers to no window.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Wraps a platform window handle; a zero handle yields an empty token.
    pub const fn from_raw(raw: isize) -> Self {
        if raw == 0 { Self(None) } else { Self(Some(raw)) }
    }

    /// The platform handle, if any.
    pub const fn raw(&self) -> Option<isize> {
        self.0
    }

    /// Whether the token refers to no window.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Platform focus bookkeeping.
///
/// Both operations are best-effort and must never fail loudly: a platform
/// without the capability hands out empty tokens, and restoring a window that
/// has since closed is a silent no-op.
pub trait FocusProvider {
    /// Remembers the currently focused window.
    fn capture(&mut self) -> FocusToken;

    /// Gives focus back to the window behind `token`.
    fn restore(&mut self, token: &FocusToken);
}

/// Focus provider for platforms where focus cannot be managed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFocus;

impl FocusProvider for NoopFocus {
    fn capture(&mut self) -> FocusToken {
        FocusToken::empty()
    }

    fn restore(&mut self, _token: &FocusToken) {}
}
