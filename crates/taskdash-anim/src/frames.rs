//! Frame timing for the browser

use crate::{AnimationRun, RunOutcome};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use taskdash_core::Progress;
use wasm_bindgen_futures::spawn_local;

/// Source of frame timestamps in milliseconds
pub trait FrameSource {
    /// Resolves when the next frame is due, yielding the current time
    fn next_frame(&mut self) -> impl Future<Output = f64>;
}

/// Wall clock in milliseconds
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Timer-paced frames at a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct TimerFrames {
    interval_ms: u32,
}

impl TimerFrames {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
        }
    }
}

impl FrameSource for TimerFrames {
    fn next_frame(&mut self) -> impl Future<Output = f64> {
        let interval = self.interval_ms;
        async move {
            TimeoutFuture::new(interval).await;
            now_ms()
        }
    }
}

/// Drive `run` on the browser event loop, feeding every frame into `sink`
pub fn spawn_run(run: AnimationRun, interval_ms: u32, sink: impl FnMut(Progress) + 'static) {
    let token = run.token();
    spawn_local(async move {
        let mut frames = TimerFrames::new(interval_ms);
        match run.drive(&mut frames, sink).await {
            RunOutcome::Settled => tracing::debug!("Animation generation {} settled", token),
            RunOutcome::Superseded => tracing::debug!("Animation generation {} superseded", token),
        }
    });
}
