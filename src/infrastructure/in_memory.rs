use crate::domain::ports::ClassificationHistory;
use crate::domain::result::{ClassificationResult, ClassificationStatus};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A bounded, thread-safe ring buffer of recent classification results.
///
/// Uses `Arc<RwLock<VecDeque<_>>>` so clones share the same buffer. Once
/// `capacity` results are held, recording another evicts the oldest.
#[derive(Clone)]
pub struct InMemoryHistory {
    capacity: usize,
    results: Arc<RwLock<VecDeque<ClassificationResult>>>,
}

impl InMemoryHistory {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(PaymentError::Config(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            results: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl ClassificationHistory for InMemoryHistory {
    async fn record(&self, result: ClassificationResult) -> Result<()> {
        let mut results = self.results.write().await;
        if results.len() == self.capacity {
            results.pop_front();
        }
        results.push_back(result);
        Ok(())
    }

    async fn recent(&self) -> Result<Vec<ClassificationResult>> {
        let results = self.results.read().await;
        Ok(results.iter().cloned().collect())
    }

    async fn status_counts(&self) -> Result<HashMap<ClassificationStatus, usize>> {
        let results = self.results.read().await;
        let mut counts = HashMap::new();
        for result in results.iter() {
            *counts.entry(result.status).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
