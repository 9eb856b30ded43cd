use crate::domain::ports::TransactionIdGenerator;
use rand::Rng;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const ID_LENGTH: usize = 8;

/// Generates random 8-character uppercase alphanumeric identifiers.
///
/// Uniqueness is not checked; ids are display tokens, not keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl TransactionIdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect()
    }
}

/// Always returns the same identifier. Useful for reproducible output.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TransactionIdGenerator for FixedIdGenerator {
    fn next_id(&self) -> String {
        self.id.clone()
    }
}
