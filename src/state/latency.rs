//! Simulated resolution time for session operations

use std::time::Duration;

/// How long an auth operation takes to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    #[default]
    Immediate,
    Fixed(Duration),
}

impl Latency {
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Latency::Immediate
        } else {
            Latency::Fixed(Duration::from_millis(ms))
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Latency::Immediate => Duration::ZERO,
            Latency::Fixed(duration) => *duration,
        }
    }

    /// Wait out the configured delay
    pub async fn settle(&self) {
        if let Latency::Fixed(duration) = self {
            tokio::time::sleep(*duration).await;
        }
    }
}
