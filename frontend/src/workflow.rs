//! Download workflow: view state and the submit-to-settle run.
//!
//! [`DownloadState`] holds the widget's state and enforces its
//! transitions. [`run_download`] drives one run: it starts the progress
//! schedule and the fetch side by side, records the outcome and settles.
//!
//! # Run lifecycle
//!
//! ```text
//! submit ──► busy, progress 0, no result
//!              │
//!              ├── tick stream: +10 per tick, dropped at 90
//!              └── fetch future
//!                    │
//!                    ▼
//!            complete: progress 100 + result  (or failure toast)
//!                    │
//!                    ▼
//!            settle (guard drop): not busy, tick stream gone
//! ```
//!
//! The state is reached through [`WorkflowHost`], so the same run logic
//! drives Leptos signals in the browser and plain cells in tests.

use futures::stream::LocalBoxStream;
use futures::{pin_mut, select, FutureExt, StreamExt};

use crate::services::{ContentFetcher, ProgressSchedule};
use crate::{
    DownloadError, DownloadResult, FetchResult, Notification, INSTAGRAM_HOST_MARKER,
    PROGRESS_CAP, PROGRESS_STEP,
};

/// Case-sensitive check for the Instagram host fragment.
pub fn is_instagram_url(input: &str) -> bool {
    input.contains(INSTAGRAM_HOST_MARKER)
}

/// What a submit did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A run started for this URL.
    Started(String),
    /// A run is already in flight; nothing changed.
    Ignored,
}

/// What a progress tick did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Progress moved to this value and may move again.
    Advanced(u8),
    /// Progress is at the cap; the schedule should stop.
    Capped,
    /// No run is waiting on progress.
    Idle,
}

/// View state of the download widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadState {
    input: String,
    is_busy: bool,
    progress: u8,
    result: Option<DownloadResult>,
}

impl DownloadState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&DownloadResult> {
        self.result.as_ref()
    }

    /// Validates the input and opens a run.
    ///
    /// On `Err` the state is untouched.
    pub fn submit(&mut self) -> Result<Submission, DownloadError> {
        if self.is_busy {
            return Ok(Submission::Ignored);
        }
        if !is_instagram_url(&self.input) {
            return Err(DownloadError::InvalidUrl(self.input.clone()));
        }

        self.is_busy = true;
        self.progress = 0;
        self.result = None;
        Ok(Submission::Started(self.input.clone()))
    }

    /// Advances progress by one step, never past [`PROGRESS_CAP`].
    pub fn tick(&mut self) -> Tick {
        if !self.is_busy || self.result.is_some() {
            return Tick::Idle;
        }
        if self.progress >= PROGRESS_CAP {
            return Tick::Capped;
        }

        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP);
        if self.progress >= PROGRESS_CAP {
            Tick::Capped
        } else {
            Tick::Advanced(self.progress)
        }
    }

    /// Records the fetch outcome of the current run and returns the toast
    /// to show. `None` when no run is open.
    pub fn complete(&mut self, outcome: FetchResult) -> Option<Notification> {
        if !self.is_busy {
            return None;
        }

        match outcome {
            Ok(result) => {
                self.progress = 100;
                self.result = Some(result);
                Some(Notification::download_ready())
            }
            Err(e) => Some(e.notification()),
        }
    }

    /// Closes the current run.
    pub fn settle(&mut self) {
        self.is_busy = false;
    }
}

/// Owner of the widget state and the notification channel.
pub trait WorkflowHost {
    /// Runs `f` against the state. `None` when the state no longer exists
    /// (the widget was unmounted).
    fn with_state<R>(&self, f: impl FnOnce(&mut DownloadState) -> R) -> Option<R>;

    /// Shows a one-shot notification.
    fn notify(&self, notification: Notification);
}

/// Settles the run when dropped, whichever way the run ends.
struct SettleGuard<'a, H: WorkflowHost> {
    host: &'a H,
}

impl<H: WorkflowHost> Drop for SettleGuard<'_, H> {
    fn drop(&mut self) {
        self.host.with_state(DownloadState::settle);
    }
}

/// Submits the current input and, if accepted, runs it to completion.
pub async fn run_download<H, F, S>(host: &H, fetcher: &F, schedule: &S)
where
    H: WorkflowHost,
    F: ContentFetcher + ?Sized,
    S: ProgressSchedule + ?Sized,
{
    let url = match host.with_state(DownloadState::submit) {
        Some(Ok(Submission::Started(url))) => url,
        Some(Ok(Submission::Ignored)) => {
            log::debug!("Submit ignored: a download is already running");
            return;
        }
        Some(Err(e)) => {
            log::warn!("⚠️ Rejected input: {}", e);
            host.notify(e.notification());
            return;
        }
        None => return,
    };

    log::info!("📥 Starting download for {}", url);
    let _settle = SettleGuard { host };

    let progress = drive_progress(host, schedule.progress_ticks()).fuse();
    let fetch = fetcher.fetch(url).fuse();
    pin_mut!(progress, fetch);

    let outcome = loop {
        select! {
            () = progress => log::debug!("Progress schedule stopped"),
            outcome = fetch => break outcome,
        }
    };

    match &outcome {
        Ok(result) => log::info!("✅ Content ready: {} ({:?})", result.source_url, result.content_kind),
        Err(e) => log::warn!("❌ {}", e),
    }

    if let Some(Some(notification)) = host.with_state(|state| state.complete(outcome)) {
        host.notify(notification);
    }
}

/// Applies ticks until the cap is reached or the run is gone.
async fn drive_progress<H: WorkflowHost>(host: &H, mut ticks: LocalBoxStream<'static, ()>) {
    while ticks.next().await.is_some() {
        match host.with_state(DownloadState::tick) {
            Some(Tick::Advanced(percent)) => log::debug!("Progress {}%", percent),
            Some(Tick::Capped) | Some(Tick::Idle) | None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentKind, Severity};
    use futures::channel::{mpsc, oneshot};
    use futures::executor::LocalPool;
    use futures::future::LocalBoxFuture;
    use futures::stream;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct TestHost {
        state: Rc<RefCell<DownloadState>>,
        notes: Rc<RefCell<Vec<Notification>>>,
        history: Rc<RefCell<Vec<u8>>>,
    }

    impl TestHost {
        fn with_input(input: &str) -> Self {
            let host = Self::default();
            host.state.borrow_mut().set_input(input);
            host
        }

        fn snapshot(&self) -> DownloadState {
            self.state.borrow().clone()
        }
    }

    impl WorkflowHost for TestHost {
        fn with_state<R>(&self, f: impl FnOnce(&mut DownloadState) -> R) -> Option<R> {
            let mut state = self.state.borrow_mut();
            let out = f(&mut state);
            self.history.borrow_mut().push(state.progress());
            Some(out)
        }

        fn notify(&self, notification: Notification) {
            self.notes.borrow_mut().push(notification);
        }
    }

    /// Fetcher resolved by the test through a oneshot.
    struct ChannelFetcher(RefCell<Option<oneshot::Receiver<FetchResult>>>);

    impl ContentFetcher for ChannelFetcher {
        fn fetch(&self, _url: String) -> LocalBoxFuture<'static, FetchResult> {
            let rx = self.0.borrow_mut().take().expect("fetch called once");
            async move { rx.await.unwrap_or_else(|_| Err(DownloadError::WorkflowFailure("dropped".into()))) }
                .boxed_local()
        }
    }

    /// Schedule ticked by the test through an mpsc channel.
    struct ChannelSchedule(RefCell<Option<mpsc::UnboundedReceiver<()>>>);

    impl ProgressSchedule for ChannelSchedule {
        fn progress_ticks(&self) -> LocalBoxStream<'static, ()> {
            match self.0.borrow_mut().take() {
                Some(rx) => rx.boxed_local(),
                None => stream::empty().boxed_local(),
            }
        }
    }

    struct Harness {
        pool: LocalPool,
        host: TestHost,
        ticks: mpsc::UnboundedSender<()>,
        done: Option<oneshot::Sender<FetchResult>>,
    }

    impl Harness {
        fn start(input: &str) -> Self {
            let host = TestHost::with_input(input);
            let (tick_tx, tick_rx) = mpsc::unbounded();
            let (done_tx, done_rx) = oneshot::channel();
            let fetcher = ChannelFetcher(RefCell::new(Some(done_rx)));
            let schedule = ChannelSchedule(RefCell::new(Some(tick_rx)));

            let mut pool = LocalPool::new();
            let run_host = host.clone();
            pool.spawner()
                .spawn_local(async move { run_download(&run_host, &fetcher, &schedule).await })
                .unwrap();
            pool.run_until_stalled();

            Self {
                pool,
                host,
                ticks: tick_tx,
                done: Some(done_tx),
            }
        }

        fn tick(&mut self, n: usize) {
            for _ in 0..n {
                let _ = self.ticks.unbounded_send(());
            }
            self.pool.run_until_stalled();
        }

        fn finish(&mut self, outcome: FetchResult) {
            self.done.take().unwrap().send(outcome).unwrap();
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn test_invalid_url_leaves_state_unchanged() {
        for input in ["https://example.com", "", "instagram", "https://INSTAGRAM.COM/p/x"] {
            let mut state = DownloadState::default();
            state.set_input(input);
            let before = state.clone();

            assert_eq!(state.submit(), Err(DownloadError::InvalidUrl(input.to_string())));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_invalid_url_run_emits_one_error() {
        let harness = Harness::start("https://example.com");

        let state = harness.host.snapshot();
        assert!(!state.is_busy());
        assert_eq!(state.progress(), 0);
        assert!(state.result().is_none());

        let notes = harness.host.notes.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Invalid URL");
        assert_eq!(notes[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_submit_opens_run() {
        let harness = Harness::start("https://instagram.com/p/ABC123");

        let state = harness.host.snapshot();
        assert!(state.is_busy());
        assert_eq!(state.progress(), 0);
        assert!(state.result().is_none());
        assert!(harness.host.notes.borrow().is_empty());
    }

    #[test]
    fn test_progress_caps_at_ninety() {
        let mut harness = Harness::start("https://instagram.com/p/ABC123");

        harness.tick(3);
        assert_eq!(harness.host.snapshot().progress(), 30);

        harness.tick(20);
        let state = harness.host.snapshot();
        assert_eq!(state.progress(), 90);
        assert!(state.is_busy());
        assert!(state.result().is_none());

        let history = harness.host.history.borrow();
        assert!(history.windows(2).all(|w| w[0] <= w[1]));
        assert!(history.iter().all(|p| *p <= 90));
    }

    #[test]
    fn test_schedule_dropped_at_cap() {
        let mut harness = Harness::start("https://instagram.com/p/ABC123");

        harness.tick(9);
        assert_eq!(harness.host.snapshot().progress(), 90);
        // Receiver is gone once the cap is reached.
        assert!(harness.ticks.unbounded_send(()).is_err());
    }

    #[test]
    fn test_successful_run() {
        let mut harness = Harness::start("https://instagram.com/p/ABC123");
        harness.tick(4);
        harness.finish(Ok(DownloadResult::placeholder("https://instagram.com/p/ABC123")));

        let state = harness.host.snapshot();
        assert!(!state.is_busy());
        assert_eq!(state.progress(), 100);
        assert_eq!(
            state.result(),
            Some(&DownloadResult {
                source_url: "https://instagram.com/p/ABC123".to_string(),
                content_kind: ContentKind::Post,
                download_target: "#".to_string(),
                thumbnail: "/placeholder.svg".to_string(),
            })
        );

        let notes = harness.host.notes.borrow();
        assert_eq!(notes.as_slice(), &[Notification::download_ready()]);

        // Schedule cancelled on settle.
        assert!(harness.ticks.unbounded_send(()).is_err());
    }

    #[test]
    fn test_failed_run() {
        let mut harness = Harness::start("https://instagram.com/reel/xyz");
        harness.tick(2);
        harness.finish(Err(DownloadError::WorkflowFailure("offline".into())));

        let state = harness.host.snapshot();
        assert!(!state.is_busy());
        assert!(state.result().is_none());
        assert_eq!(state.progress(), 20);

        let notes = harness.host.notes.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Download Failed");
        assert_eq!(notes[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_dropped_run_still_settles() {
        let host = TestHost::with_input("https://instagram.com/p/ABC123");
        let (_done_tx, done_rx) = oneshot::channel();
        let fetcher = ChannelFetcher(RefCell::new(Some(done_rx)));
        let schedule = ChannelSchedule(RefCell::new(None));

        {
            let run = run_download(&host, &fetcher, &schedule);
            futures::pin_mut!(run);
            let waker = futures::task::noop_waker();
            let mut cx = std::task::Context::from_waker(&waker);
            assert!(run.as_mut().poll(&mut cx).is_pending());
            assert!(host.snapshot().is_busy());
        }

        assert!(!host.snapshot().is_busy());
        assert!(host.notes.borrow().is_empty());
    }

    #[test]
    fn test_resubmit_resets_previous_result() {
        let mut state = DownloadState::default();
        state.set_input("https://instagram.com/p/ABC123");
        state.submit().unwrap();
        state.complete(Ok(DownloadResult::placeholder("https://instagram.com/p/ABC123")));
        state.settle();
        assert_eq!(state.progress(), 100);

        state.set_input("https://instagram.com/p/DEF456");
        assert_eq!(
            state.submit(),
            Ok(Submission::Started("https://instagram.com/p/DEF456".to_string()))
        );
        assert_eq!(state.progress(), 0);
        assert!(state.result().is_none());
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut state = DownloadState::default();
        state.set_input("https://instagram.com/p/ABC123");
        state.submit().unwrap();
        state.tick();

        let before = state.clone();
        state.set_input("https://example.com");
        assert_eq!(state.submit(), Ok(Submission::Ignored));
        assert_eq!(state.progress(), before.progress());
        assert!(state.is_busy());
    }

    #[test]
    fn test_tick_without_run_is_idle() {
        let mut state = DownloadState::default();
        assert_eq!(state.tick(), Tick::Idle);
        assert_eq!(state.progress(), 0);

        state.set_input("https://instagram.com/p/ABC123");
        state.submit().unwrap();
        state.complete(Ok(DownloadResult::placeholder("https://instagram.com/p/ABC123")));
        assert_eq!(state.tick(), Tick::Idle);
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn test_complete_without_run_is_ignored() {
        let mut state = DownloadState::default();
        assert_eq!(state.complete(Ok(DownloadResult::placeholder("x"))), None);
        assert!(state.result().is_none());
    }
}
