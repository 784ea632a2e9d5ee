//! User-facing notices
//!
//! Warnings and errors go to stderr so the art on stdout stays pipeable.
//! The bell cue is part of the notifier handle, not global state.

use parking_lot::Mutex;
use std::io::Write;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeKind::Success => "ok",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }

    /// Whether this kind gets an audible cue
    pub fn rings_bell(&self) -> bool {
        !matches!(self, NoticeKind::Success)
    }
}

/// Delivers notices to the user
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Writes notices to a terminal stream, optionally ringing the bell
pub struct TerminalNotifier<W: Write> {
    out: Mutex<W>,
    bell: bool,
}

impl TerminalNotifier<std::io::Stderr> {
    /// Notifier on stderr
    pub fn stderr(bell: bool) -> Self {
        Self::new(std::io::stderr(), bell)
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W, bell: bool) -> Self {
        Self {
            out: Mutex::new(out),
            bell,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::debug!("{}", message),
            NoticeKind::Warning => tracing::debug!("warning notice: {}", message),
            NoticeKind::Error => tracing::debug!("error notice: {}", message),
        }

        let cue = if self.bell && kind.rings_bell() {
            "\x07"
        } else {
            ""
        };

        let mut out = self.out.lock();
        // Nowhere left to report a failed notice
        let _ = writeln!(out, "{}: {}{}", kind.label(), message, cue);
        let _ = out.flush();
    }
}
