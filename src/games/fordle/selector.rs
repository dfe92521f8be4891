//! Random target selection from the reference set.

use super::target::Target;
use crate::reference::ReferenceSet;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random target from a validated reference set.
///
/// Sampling is with replacement: the same symbol may recur in consecutive
/// rounds, which is accepted behavior. Selection is infallible because an
/// empty reference set is rejected when the [`ReferenceSet`] is built at
/// startup.
#[derive(Debug, Clone)]
pub struct TargetSelector {
    reference: ReferenceSet,
}

impl TargetSelector {
    /// Creates a selector over the given reference set.
    #[instrument(skip(reference), fields(entries = reference.len()))]
    pub fn new(reference: ReferenceSet) -> Self {
        Self { reference }
    }

    /// The reference set this selector draws from.
    pub fn reference(&self) -> &ReferenceSet {
        &self.reference
    }

    /// Selects a random target using the thread-local RNG.
    #[instrument(skip(self))]
    pub fn select(&self) -> Target {
        self.select_with(&mut rand::thread_rng())
    }

    /// Selects a random target using the provided RNG.
    ///
    /// Deterministic when given a seeded RNG, which the tests rely on.
    pub fn select_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Target {
        let entry = self
            .reference
            .entries()
            .choose(rng)
            .expect("reference set is validated non-empty at construction");
        debug!(symbol = %entry.symbol(), "Target selected");
        Target::new(entry.symbol(), entry.sector(), entry.headquarters())
    }
}
