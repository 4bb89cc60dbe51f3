use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Longest `Id` SQS accepts for a batch entry.
pub const MAX_MESSAGE_ID_LENGTH: usize = 80;

/// Produces per-entry identifiers drawn from `[A-Za-z0-9]`.
///
/// Identifiers only need to be unique within one batch, so collisions across
/// batches are tolerated.
#[derive(Debug)]
pub struct MessageIdGenerator {
    rng: StdRng,
    length: usize,
}

impl MessageIdGenerator {
    /// Seeded once from the wall clock.
    pub fn new(length: usize) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(length, seed)
    }

    pub fn with_seed(length: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            length,
        }
    }

    pub fn next_id(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
