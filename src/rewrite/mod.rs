//! T-SQL to PostgreSQL rewrite pipeline
//!
//! A fixed sequence of independent text rules. There is no parser: each
//! rule is a pattern substitution over the previous rule's output.
//!
//! ```text
//! query → hints → [ids] → NEWID → OFFSET/FETCH → TOP → dates → renames → concat → booleans → query
//! ```

mod registry;
mod rules;
mod traits;

pub use registry::*;
pub use rules::*;
pub use traits::*;

use crate::config::TranslatorConfig;
use crate::error::ShiftResult;

/// A configured rewrite pipeline.
pub struct Translator {
    pipeline: RulePipeline,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Standard rules with the default boolean column fragments.
    pub fn new() -> Self {
        Self {
            pipeline: RulePipeline::new(),
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> ShiftResult<Self> {
        let booleans = if config.booleans.enabled {
            Some(BooleanLiterals::new(config.booleans.columns.iter().cloned())?)
        } else {
            None
        };
        Ok(Self::with_pipeline(RulePipeline::with_booleans(booleans)))
    }

    pub fn with_pipeline(pipeline: RulePipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &RulePipeline {
        &self.pipeline
    }

    /// Translate one query. Empty input comes back unchanged.
    pub fn translate(&self, query: &str) -> String {
        if query.is_empty() {
            return String::new();
        }
        self.pipeline.apply(query)
    }
}
