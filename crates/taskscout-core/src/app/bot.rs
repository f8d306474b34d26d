//! ScoutBot - ポーリングループ本体
//!
//! 1 サイクル: fetch → Task::from_raw → FilterEngine::select →（auto_submit なら）submit
//! 取得失敗は空バッチとして扱い、ループは止めない。

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{info, warn};

use super::{EarningsReport, SessionLedger};
use crate::config::ScoutConfig;
use crate::domain::{Task, TaskId};
use crate::engine::FilterEngine;
use crate::ports::{Submission, TaskSource, WorkSubmitter};

/// Selections logged per cycle.
pub const TOP_N: usize = 5;

/// One bot session: owns the engine (and with it the seen-set) and the ledger.
pub struct ScoutBot {
    wallet: String,
    source: Arc<dyn TaskSource>,
    submitter: Arc<dyn WorkSubmitter>,
    engine: FilterEngine,
    ledger: SessionLedger,
}

impl ScoutBot {
    pub fn new(
        wallet: impl Into<String>,
        config: ScoutConfig,
        source: Arc<dyn TaskSource>,
        submitter: Arc<dyn WorkSubmitter>,
    ) -> Self {
        Self {
            wallet: wallet.into(),
            source,
            submitter,
            engine: FilterEngine::new(config),
            ledger: SessionLedger::new(),
        }
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    pub fn config(&self) -> &ScoutConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// Run one monitoring cycle and return the ranked selection.
    pub async fn run_once(&mut self) -> Vec<Task> {
        let raw = match self.source.fetch_tasks().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "fetching tasks failed, treating as empty batch");
                Vec::new()
            }
        };
        let fetched = raw.len();
        let tasks: Vec<Task> = raw.into_iter().map(Task::from_raw).collect();
        let selected = self.engine.select(tasks);

        info!(
            session = %self.ledger.session_id(),
            fetched,
            selected = selected.len(),
            seen = self.engine.seen().len(),
            "scan complete"
        );
        for (rank, task) in selected.iter().take(TOP_N).enumerate() {
            info!(
                rank = rank + 1,
                task_id = %task.id(),
                title = task.title(),
                reward = task.reward(),
                ai_score = task.ai_score(),
                estimated_hours = task.estimated_hours(),
                roi = task.roi(),
                task_type = %task.task_type(),
                "suitable task"
            );
        }

        if self.config().auto_submit {
            self.auto_submit(&selected).await;
        }

        selected
    }

    async fn auto_submit(&mut self, selected: &[Task]) {
        let Some(proof_url) = self.config().proof_url.clone() else {
            if !selected.is_empty() {
                warn!("auto_submit is on but proof_url is not configured, skipping submissions");
            }
            return;
        };
        for task in selected {
            let message = format!("Submitting work for: {}", task.title());
            self.submit_task(task, &message, &proof_url).await;
        }
    }

    /// Submit work for a task picked in this session; success is recorded in the ledger.
    pub async fn submit_task(&mut self, task: &Task, message: &str, proof_url: &str) -> bool {
        let ok = self.submit_work(task.id(), message, proof_url).await;
        if ok {
            self.ledger.record(task);
        }
        ok
    }

    /// Submit completed work. Failures are logged and reported as `false`.
    pub async fn submit_work(&self, task_id: &TaskId, message: &str, proof_url: &str) -> bool {
        let submission = Submission {
            task_id: task_id.clone(),
            worker_address: self.wallet.clone(),
            message: message.to_string(),
            proof_url: proof_url.to_string(),
        };
        match self.submitter.submit(&submission).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%task_id, error = %e, "submitting work failed");
                false
            }
        }
    }

    /// Poll every `check_interval` until `shutdown` flips to true (or its
    /// sender is dropped), then return the session report.
    pub async fn run_continuous(&mut self, mut shutdown: watch::Receiver<bool>) -> EarningsReport {
        let interval = self.config().check_interval();
        info!(
            session = %self.ledger.session_id(),
            wallet = %self.wallet,
            interval_secs = interval.as_secs(),
            "bot starting"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.run_once().await;

            // sleep 中でも shutdown に即応する
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = sleep(interval) => {}
            }
        }

        info!(session = %self.ledger.session_id(), "bot stopped");
        self.report()
    }

    pub fn report(&self) -> EarningsReport {
        self.ledger.report_now(self.engine.seen().len())
    }
}
