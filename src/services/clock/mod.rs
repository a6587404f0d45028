//! Host clock access and the once-a-minute refresh of "now".
//!
//! [`TickTimer`] is a scoped recurring timer: it owns a worker thread that is
//! stopped and joined when the timer is cancelled or dropped. [`LiveClock`]
//! wraps one and only mutates its `now` value from the thread that polls it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// Read-only source of the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to an instant that can be moved by hand.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Recurring timer backed by a worker thread.
///
/// The callback runs on the worker every `interval` until the timer is
/// cancelled. Dropping the timer cancels it.
pub struct TickTimer {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TickTimer {
    pub fn start<F>(interval: Duration, on_tick: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("preview-clock".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    // Explicit stop or the timer handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .context("Failed to spawn clock timer thread")?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the worker and wait for it to exit. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Clock timer thread panicked");
            }
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The "now" instant behind the current-time line and badge.
pub struct LiveClock {
    clock: Arc<dyn Clock>,
    now: DateTime<Local>,
    ticks: Receiver<()>,
    timer: Option<TickTimer>,
}

impl LiveClock {
    /// Read the clock and start refreshing it every `interval`.
    ///
    /// `wake` runs on the timer thread after each tick so the owner can
    /// schedule a poll (for egui, a repaint request).
    pub fn mount<W>(clock: Arc<dyn Clock>, interval: Duration, wake: W) -> Result<Self>
    where
        W: Fn() + Send + 'static,
    {
        let (tick_tx, ticks) = mpsc::channel();
        let timer = TickTimer::start(interval, move || {
            if tick_tx.send(()).is_ok() {
                wake();
            }
        })?;
        let now = clock.now();
        log::info!("Live clock mounted at {} (interval {:?})", now.format("%H:%M"), interval);

        Ok(Self {
            clock,
            now,
            ticks,
            timer: Some(timer),
        })
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(TickTimer::is_running)
    }

    /// Apply queued ticks. Returns `true` when `now` was refreshed.
    pub fn poll(&mut self) -> bool {
        let mut ticked = false;
        while self.ticks.try_recv().is_ok() {
            ticked = true;
        }
        if ticked {
            self.now = self.clock.now();
            log::debug!("Live clock tick: {}", self.now.format("%H:%M"));
        }
        ticked
    }

    /// Cancel the timer. `now` keeps its last value.
    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
            log::info!("Live clock unmounted");
        }
    }
}

impl Drop for LiveClock {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 12, h, m, 0).unwrap()
    }

    fn wait_until(timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if done() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        done()
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(at(9, 0));
        assert_eq!(clock.now(), at(9, 0));
        clock.set(at(9, 1));
        assert_eq!(clock.now(), at(9, 1));
    }

    #[test]
    fn test_timer_fires_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let _timer = TickTimer::start(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert!(wait_until(Duration::from_secs(2), || count.load(Ordering::SeqCst) >= 3));
    }

    #[test]
    fn test_timer_stops_after_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let timer = TickTimer::start(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        assert!(wait_until(Duration::from_secs(2), || count.load(Ordering::SeqCst) >= 1));

        // Drop joins the worker, so no tick can land afterwards.
        drop(timer);
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = TickTimer::start(Duration::from_secs(60), || {}).unwrap();
        assert!(timer.is_running());
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_mount_reads_clock_once() {
        let mut mock = MockClock::new();
        mock.expect_now().times(1).returning(|| at(8, 15));

        let mut live = LiveClock::mount(Arc::new(mock), Duration::from_secs(60), || {}).unwrap();
        assert_eq!(live.now(), at(8, 15));
        // No tick has fired, so polling must not read the clock again.
        assert!(!live.poll());
        assert_eq!(live.now(), at(8, 15));
    }

    #[test]
    fn test_poll_refreshes_after_tick() {
        let clock = Arc::new(FixedClock::new(at(9, 0)));
        let woken = Arc::new(AtomicUsize::new(0));
        let wake_count = woken.clone();
        let mut live = LiveClock::mount(clock.clone(), Duration::from_millis(10), move || {
            wake_count.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        clock.set(at(9, 1));
        // Value only changes when the owner polls.
        assert_eq!(live.now(), at(9, 0));
        assert!(wait_until(Duration::from_secs(2), || woken.load(Ordering::SeqCst) >= 1));
        assert!(live.poll());
        assert_eq!(live.now(), at(9, 1));
    }

    #[test]
    fn test_unmount_cancels_timer() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(at(9, 0)));
        let mut live = LiveClock::mount(clock, Duration::from_millis(10), || {}).unwrap();
        assert!(live.is_running());
        live.unmount();
        assert!(!live.is_running());
        // Drain anything queued before the cancel; nothing arrives afterwards.
        live.poll();
        thread::sleep(Duration::from_millis(40));
        assert!(!live.poll());
    }
}
