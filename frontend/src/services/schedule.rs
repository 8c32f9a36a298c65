//! Progress tick sources.

use futures::stream::LocalBoxStream;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;

use crate::PROGRESS_TICK_MS;

/// Produces the tick stream of one run.
///
/// Dropping the stream must cancel the underlying timer.
pub trait ProgressSchedule {
    fn progress_ticks(&self) -> LocalBoxStream<'static, ()>;
}

/// Browser interval ticking every `period_ms`.
///
/// The interval is cleared when the stream is dropped.
#[derive(Clone, Copy, Debug)]
pub struct IntervalSchedule {
    pub period_ms: u32,
}

impl Default for IntervalSchedule {
    fn default() -> Self {
        Self {
            period_ms: PROGRESS_TICK_MS,
        }
    }
}

impl ProgressSchedule for IntervalSchedule {
    fn progress_ticks(&self) -> LocalBoxStream<'static, ()> {
        IntervalStream::new(self.period_ms).boxed_local()
    }
}
