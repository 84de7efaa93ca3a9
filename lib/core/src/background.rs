//! Cancellable background construction of the ranking table.
//!
//! For vocabularies in the tens of thousands a foreground build is cheap,
//! but callers driving very large word lists can run the build on a worker
//! thread and keep the UI responsive. The worker checks a cancel flag
//! between chunks and publishes either a complete table or nothing at all.

use crate::error::Result;
use crate::ranking::{self, RankingTable};
use crate::vocabulary::Vocabulary;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// How many similarities to compute between cancellation checks
const CANCEL_CHECK_INTERVAL: usize = 1024;

/// Handle to a ranking build running on a worker thread.
pub struct RankingBuild {
    slot: Arc<Mutex<Option<Result<RankingTable>>>>,
    cancel: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl RankingBuild {
    /// Start building the table for `target_index` on a new thread.
    pub fn spawn(vocabulary: Arc<Vocabulary>, target_index: usize) -> Result<Self> {
        let slot: Arc<Mutex<Option<Result<RankingTable>>>> = Arc::new(Mutex::new(None));
        let cancel = Arc::new(AtomicBool::new(false));

        let worker_slot = slot.clone();
        let worker_cancel = cancel.clone();
        let handle = thread::Builder::new()
            .name("ranking-build".to_string())
            .spawn(move || {
                if let Some(result) =
                    build_cancellable(&vocabulary, target_index, &worker_cancel)
                {
                    *worker_slot.lock() = Some(result);
                }
            })?;

        Ok(Self {
            slot,
            cancel,
            handle: Some(handle),
        })
    }

    /// Ask the worker to stop. A cancelled build publishes no table.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Block until the worker exits and take its result.
    /// Returns `None` when the build was cancelled.
    pub fn join(mut self) -> Option<Result<RankingTable>> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.slot.lock().take()
    }
}

impl Drop for RankingBuild {
    fn drop(&mut self) {
        // A dropped handle should not keep a doomed build running.
        self.cancel.store(true, Ordering::Release);
    }
}

fn build_cancellable(
    vocabulary: &Vocabulary,
    target_index: usize,
    cancel: &AtomicBool,
) -> Option<Result<RankingTable>> {
    let target = match ranking::check_target(vocabulary, target_index) {
        Ok(target) => target.clone(),
        Err(e) => return Some(Err(e)),
    };

    let mut similarities = Vec::with_capacity(vocabulary.len());
    for chunk in vocabulary.vectors().chunks(CANCEL_CHECK_INTERVAL) {
        if cancel.load(Ordering::Acquire) {
            return None;
        }
        for vector in chunk {
            match target.cosine_similarity(vector) {
                Ok(similarity) => similarities.push(similarity),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    if cancel.load(Ordering::Acquire) {
        return None;
    }
    Some(Ok(ranking::assemble(vocabulary, target_index, similarities)))
}
