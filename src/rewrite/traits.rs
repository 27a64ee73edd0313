//! Core traits for the rewrite pipeline

/// Read-only context shared by every rule during one translation.
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    /// The query exactly as the caller passed it, before any rule ran.
    pub original: &'a str,
}

impl<'a> RewriteContext<'a> {
    pub fn new(original: &'a str) -> Self {
        Self { original }
    }
}

/// A single text-to-text rewrite stage.
///
/// Rules never fail: a pattern that does not match leaves the text as it
/// was. Applying a rule to its own output must not change it again.
pub trait RewriteRule: Send + Sync {
    fn id(&self) -> &'static str;

    /// Rewrite `sql`, the output of the previous stage.
    fn apply(&self, sql: &str, ctx: &RewriteContext<'_>) -> String;
}
