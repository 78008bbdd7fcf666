//! Animation runs and cancellation

use crate::frames::FrameSource;
use crate::{AnimationConfig, Easing};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use taskdash_core::Progress;

// ============================================================================
// ANIMATION HANDLE (Send + Sync)
// ============================================================================

/// Shared generation counter; only the run holding the latest token may emit
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    generation: Arc<AtomicU64>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding run and return the new token
    pub fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current() == token
    }

    /// Stop the active run without starting a new one
    pub fn cancel(&self) {
        self.advance();
    }
}

// ============================================================================
// ANIMATION DRIVER
// ============================================================================

/// Starts runs; at most one run is live at a time
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    config: AnimationConfig,
    handle: AnimationHandle,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            handle: AnimationHandle::new(),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn handle(&self) -> &AnimationHandle {
        &self.handle
    }

    /// Supersede any run in flight and start a fresh one at `now_ms`
    pub fn restart(&self, now_ms: f64) -> AnimationRun {
        let token = self.handle.advance();
        tracing::debug!("Animation restarted (generation {})", token);
        AnimationRun {
            token,
            started_at_ms: now_ms,
            last: Progress::ZERO,
            phase: AnimationPhase::Idle,
            config: self.config.clone(),
            handle: self.handle.clone(),
        }
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }
}

// ============================================================================
// ANIMATION RUN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Started, no frame sampled yet
    #[default]
    Idle,
    Animating,
    Settled,
}

/// Result of sampling a run at one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// A newer run has started; this one must not emit
    Stale,
    Advanced(Progress),
    /// Reached full reveal
    Settled,
}

/// How a driven run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Settled,
    Superseded,
}

/// One reveal from 0 to 1
#[derive(Debug, Clone)]
pub struct AnimationRun {
    token: u64,
    started_at_ms: f64,
    last: Progress,
    phase: AnimationPhase,
    config: AnimationConfig,
    handle: AnimationHandle,
}

impl AnimationRun {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Last progress this run produced
    pub fn progress(&self) -> Progress {
        self.last
    }

    pub fn is_current(&self) -> bool {
        self.handle.is_current(self.token)
    }

    /// Progress at `now_ms`; never lower than the previous sample
    pub fn sample(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.is_current() {
            return FrameOutcome::Stale;
        }
        if self.phase == AnimationPhase::Settled {
            return FrameOutcome::Settled;
        }

        let t = self.config.normalized_time(now_ms - self.started_at_ms);
        if t >= 1.0 {
            self.last = Progress::COMPLETE;
            self.phase = AnimationPhase::Settled;
            return FrameOutcome::Settled;
        }

        let eased = Progress::new(self.config.easing.ease(t));
        if eased > self.last {
            self.last = eased;
        }
        self.phase = AnimationPhase::Animating;
        FrameOutcome::Advanced(self.last)
    }

    /// Feed progress into `sink` until the run settles or is superseded.
    ///
    /// Emits 0 before the first frame and 1 on settling.
    pub async fn drive<F: FrameSource>(
        mut self,
        frames: &mut F,
        mut sink: impl FnMut(Progress),
    ) -> RunOutcome {
        if !self.is_current() {
            return RunOutcome::Superseded;
        }
        sink(Progress::ZERO);

        loop {
            let now = frames.next_frame().await;
            match self.sample(now) {
                FrameOutcome::Stale => {
                    tracing::trace!("Animation generation {} superseded", self.token);
                    return RunOutcome::Superseded;
                }
                FrameOutcome::Advanced(progress) => {
                    tracing::trace!(progress = progress.value(), "animation frame");
                    sink(progress)
                }
                FrameOutcome::Settled => {
                    sink(Progress::COMPLETE);
                    return RunOutcome::Settled;
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
