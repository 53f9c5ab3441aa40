use rand::Rng;

use crate::{
    eval::degeneracy::{CornerReport, DegeneracyCheck, inspect_corners},
    mutate::mutator::{MutationStats, Mutator},
    tree::node::Expr,
};

/// Default cap on mutation attempts per interaction.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 256;

/// What to keep when every attempt in the budget was rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedPolicy {
    /// Keep the tree from before the interaction.
    #[default]
    KeepPrevious,
    /// Keep the final rejected attempt, flat image included.
    KeepLastAttempt,
}

/// Knobs for [`mutate_with_retry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts before giving up. Zero behaves like an exhausted budget.
    pub max_attempts: u32,
    /// Equality test used on corner samples.
    pub check: DegeneracyCheck,
    /// Fallback once the budget is spent.
    pub on_exhausted: ExhaustedPolicy,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            check: DegeneracyCheck::default(),
            on_exhausted: ExhaustedPolicy::default(),
        }
    }
}

/// Which tree [`mutate_with_retry`] handed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A mutation passed the degeneracy filter.
    Accepted,
    /// Budget spent; the input tree was returned unchanged.
    KeptPrevious,
    /// Budget spent; the last rejected attempt was returned.
    KeptLastAttempt,
}

/// Bookkeeping for one call to [`mutate_with_retry`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryOutcome {
    /// Mutation attempts made.
    pub attempts: u32,
    /// Which tree was returned.
    pub resolution: Resolution,
    /// Mutation events of the last attempt.
    pub stats: MutationStats,
    /// Corner report of the last attempt, if any attempt ran.
    pub report: Option<CornerReport>,
}

/// Mutate copies of `root` until one passes the degeneracy filter or the budget runs out.
///
/// Every attempt starts over from `root`; rejected attempts are dropped whole, so a partially
/// mutated tree is never observable. `root` itself is never modified.
#[tracing::instrument(level = "debug", skip_all, fields(max_attempts = policy.max_attempts))]
pub fn mutate_with_retry<R: Rng + ?Sized>(
    root: &Expr,
    mutator: &Mutator,
    policy: &RetryPolicy,
    rng: &mut R,
) -> (Expr, RetryOutcome) {
    let mut last: Option<(Expr, MutationStats, CornerReport)> = None;

    for attempt in 1..=policy.max_attempts {
        let mut candidate = root.clone();
        let stats = mutator.mutate(&mut candidate, rng);
        let report = inspect_corners(&candidate, policy.check);

        if !report.is_degenerate() {
            tracing::debug!(
                attempt,
                strikes = report.strike_count(),
                nodes = candidate.node_count(),
                structural = stats.is_structural(),
                ?stats,
                "accepted mutation"
            );
            let outcome = RetryOutcome {
                attempts: attempt,
                resolution: Resolution::Accepted,
                stats,
                report: Some(report),
            };
            return (candidate, outcome);
        }

        tracing::trace!(attempt, "rejected flat mutation");
        last = Some((candidate, stats, report));
    }

    tracing::warn!(
        attempts = policy.max_attempts,
        policy = ?policy.on_exhausted,
        "every mutation attempt was flat"
    );

    match (policy.on_exhausted, last) {
        (ExhaustedPolicy::KeepLastAttempt, Some((candidate, stats, report))) => (
            candidate,
            RetryOutcome {
                attempts: policy.max_attempts,
                resolution: Resolution::KeptLastAttempt,
                stats,
                report: Some(report),
            },
        ),
        (_, last) => (
            root.clone(),
            RetryOutcome {
                attempts: policy.max_attempts,
                resolution: Resolution::KeptPrevious,
                stats: last.as_ref().map(|(_, s, _)| *s).unwrap_or_default(),
                report: last.map(|(_, _, r)| r),
            },
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mutate/retry.rs"]
mod tests;
