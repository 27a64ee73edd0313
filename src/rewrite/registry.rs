//! Ordered rule pipeline

use super::rules::*;
use super::traits::*;

/// An ordered list of rewrite rules.
///
/// Rules run in registration order, each on the previous rule's output.
pub struct RulePipeline {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RulePipeline {
    /// Create a pipeline with the standard T-SQL to PostgreSQL rules.
    pub fn new() -> Self {
        Self::with_booleans(Some(BooleanLiterals::default()))
    }

    /// Standard rules, with the boolean stage replaced or left out.
    pub fn with_booleans(booleans: Option<BooleanLiterals>) -> Self {
        let mut pipeline = Self::empty();

        // Fixed order. Booleans must see identifiers already double-quoted.
        pipeline.register(Box::new(StripTableHints));
        pipeline.register(Box::new(BracketIdentifiers));
        pipeline.register(Box::new(RandomFunction));
        pipeline.register(Box::new(OffsetFetch));
        pipeline.register(Box::new(TopToLimit));
        pipeline.register(Box::new(DateFunctions));
        pipeline.register(Box::new(ScalarRenames));
        pipeline.register(Box::new(LiteralConcat));
        if let Some(rule) = booleans {
            pipeline.register(Box::new(rule));
        }

        pipeline
    }

    /// A pipeline with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the pipeline.
    pub fn register(&mut self, rule: Box<dyn RewriteRule>) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: impl RewriteRule + 'static) -> Self {
        self.register(Box::new(rule));
        self
    }

    /// Rule ids in execution order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `sql`.
    pub fn apply(&self, sql: &str) -> String {
        let ctx = RewriteContext::new(sql);
        let mut current = sql.to_string();
        let mut changed = 0usize;

        for rule in &self.rules {
            let next = rule.apply(&current, &ctx);
            if next != current {
                tracing::trace!(rule = rule.id(), "rule rewrote query");
                changed += 1;
                current = next;
            }
        }

        tracing::debug!(rules = self.rules.len(), changed, "query translated");
        current
    }
}
