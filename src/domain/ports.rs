use super::result::{ClassificationResult, ClassificationStatus};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of opaque transaction identifiers.
pub trait TransactionIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Retains recently produced classification results.
#[async_trait]
pub trait ClassificationHistory: Send + Sync {
    async fn record(&self, result: ClassificationResult) -> Result<()>;
    async fn recent(&self) -> Result<Vec<ClassificationResult>>;
    async fn status_counts(&self) -> Result<HashMap<ClassificationStatus, usize>>;
}

pub type ClassificationHistoryBox = Box<dyn ClassificationHistory>;
