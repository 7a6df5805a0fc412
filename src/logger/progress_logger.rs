use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::constants::{
    sleep_duration_millis, COMPLETION_PAUSE_MS, PROGRESS_KB_PER_SECOND,
    PROGRESS_MAX_ESTIMATE_SECS, PROGRESS_MIN_ESTIMATE_SECS,
};

#[derive(Debug, Clone)]
pub struct ProgressStage {
    pub label: &'static str,
    pub percent: u8,
    pub delay: Duration,
}

/// Fixed stage sequence played back during an upload. The timing is an
/// estimate derived from the file size and never reflects real server
/// progress; the only contract is that percents are non-decreasing and reach
/// 100 only once the response is in hand.
#[derive(Debug, Clone)]
pub struct ProgressPlan {
    stages: Vec<ProgressStage>,
}

impl ProgressPlan {
    pub fn for_file_size(size_bytes: u64) -> Self {
        let estimated_secs = Self::estimated_seconds(size_bytes);

        let stages = vec![
            ProgressStage { label: "Uploading document...", percent: 10, delay: Duration::from_millis(500) },
            ProgressStage { label: "Reading document content...", percent: 25, delay: Duration::from_millis(1000) },
            ProgressStage { label: "Analyzing with AI...", percent: 45, delay: Duration::from_millis(2000) },
            ProgressStage { label: "Extracting ROI indicators...", percent: 70, delay: Duration::from_secs_f64(estimated_secs * 0.4) },
            ProgressStage { label: "Generating recommendations...", percent: 90, delay: Duration::from_secs_f64(estimated_secs * 0.3) },
        ];

        Self { stages }
    }

    pub fn estimated_seconds(size_bytes: u64) -> f64 {
        let size_kb = size_bytes as f64 / 1024.0;
        (size_kb / PROGRESS_KB_PER_SECOND).clamp(PROGRESS_MIN_ESTIMATE_SECS, PROGRESS_MAX_ESTIMATE_SECS)
    }

    pub fn stages(&self) -> &[ProgressStage] {
        &self.stages
    }
}

/// Plays a ProgressPlan on stderr from a spawned task while the upload runs.
/// The playback is independent of the network call; `finish` and `fail` stop
/// it whenever the real response arrives.
pub struct ProgressLogger {
    percent_tx: Arc<watch::Sender<u8>>,
    stop_tx: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressLogger {
    pub fn start(plan: ProgressPlan) -> Self {
        let percent_tx = Arc::new(watch::channel(0u8).0);
        let tx = Arc::clone(&percent_tx);
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();

        let task_handle = tokio::spawn(async move {
            for stage in plan.stages {
                let _ = tx.send(stage.percent);
                eprint!("\r\x1b[K⏳ {} {}%", stage.label, stage.percent);
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(stage.delay) => {}
                    _ = stop_rx.recv() => return,
                }
            }

            // Hold the last stage until the response lands.
            let _ = stop_rx.recv().await;
        });

        Self {
            percent_tx,
            stop_tx: Some(stop_tx),
            task_handle: Some(task_handle),
        }
    }

    pub fn percent(&self) -> u8 {
        *self.percent_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.percent_tx.subscribe()
    }

    /// Pins the sequence at 100 and pauses briefly before the report is shown.
    pub async fn finish(&mut self) {
        self.halt().await;

        let _ = self.percent_tx.send(95);
        eprint!("\r\x1b[K⏳ Finalizing results... 95%");
        let _ = std::io::stderr().flush();

        let _ = self.percent_tx.send(100);
        eprint!("\r\x1b[K✅ Analysis complete 100%\n");
        let _ = std::io::stderr().flush();

        tokio::time::sleep(sleep_duration_millis(COMPLETION_PAUSE_MS)).await;
    }

    pub async fn fail(&mut self, message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", message);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_tx.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}
