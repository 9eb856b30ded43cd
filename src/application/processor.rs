use super::engine::ClassificationEngine;
use crate::domain::ports::{ClassificationHistoryBox, TransactionIdGenerator};
use crate::domain::request::PaymentRequest;
use crate::domain::result::{ClassificationResult, ClassificationStatus};
use crate::error::Result;
use crate::infrastructure::random_id::RandomIdGenerator;
use std::collections::HashMap;
use tracing::info;

/// Decodes requests, classifies them and keeps a bounded history.
///
/// `PaymentProcessor` owns the engine and the history backend. Each request
/// is classified independently; the history is the only shared state.
pub struct PaymentProcessor<G: TransactionIdGenerator = RandomIdGenerator> {
    engine: ClassificationEngine<G>,
    history: ClassificationHistoryBox,
}

impl PaymentProcessor {
    pub fn new(history: ClassificationHistoryBox) -> Self {
        Self::with_engine(ClassificationEngine::new(), history)
    }
}

impl<G: TransactionIdGenerator> PaymentProcessor<G> {
    pub fn with_engine(engine: ClassificationEngine<G>, history: ClassificationHistoryBox) -> Self {
        Self { engine, history }
    }

    /// Classifies one request and records the result.
    ///
    /// Malformed requests are rejected before classification and are not
    /// recorded. Reporting the rejection is left to the caller.
    pub async fn process(&self, request: &PaymentRequest) -> Result<ClassificationResult> {
        let instrument = request.to_instrument()?;
        let result = self.engine.classify_in(&instrument, &request.context());
        self.history.record(result.clone()).await?;
        Ok(result)
    }

    pub async fn recent(&self) -> Result<Vec<ClassificationResult>> {
        self.history.recent().await
    }

    /// Counts of each status over the retained history.
    pub async fn summary(&self) -> Result<HashMap<ClassificationStatus, usize>> {
        let counts = self.history.status_counts().await?;
        info!(
            success = counts.get(&ClassificationStatus::Success).copied().unwrap_or(0),
            pending = counts.get(&ClassificationStatus::Pending).copied().unwrap_or(0),
            verification = counts
                .get(&ClassificationStatus::RequiresVerification)
                .copied()
                .unwrap_or(0),
            "classification summary"
        );
        Ok(counts)
    }
}
