use crate::sync::{Condvar, Mutex};
use std::sync::Arc;

/// One-shot signal: a boolean flag bundled with the mutex and condition
/// variable that protect it.
///
/// A `Signal` starts unset. One thread eventually calls [`set`], which flips
/// the flag under the mutex and wakes every waiter. Any number of threads may
/// call [`wait`], which blocks until the flag is observed set. The flag is
/// monotonic: there is no way to clear it, so a signal is good for exactly
/// one false-to-true transition and a fresh instance should be created for
/// each round of coordination.
///
/// The wait is predicate-protected: it re-checks the flag on every wakeup,
/// so a spurious wakeup cannot release a waiter early, and it checks the
/// flag before blocking at all, so a `set` that happens before the `wait`
/// begins is never lost.
///
/// ```
/// use handoff::Signal;
/// use std::thread;
///
/// let first_done = Signal::new();
///
/// thread::scope(|s| {
///     s.spawn(|| {
///         println!("first");
///         first_done.set();
///     });
///     s.spawn(|| {
///         first_done.wait();
///         println!("second");
///     });
/// });
/// ```
///
/// [`set`]: Signal::set
/// [`wait`]: Signal::wait
#[derive(Clone)]
pub struct Signal {
    inner: Arc<Inner>,
}

#[cfg(test)]
struct _Test
where
    Signal: Send + Sync;

struct Inner {
    set: Mutex<bool>,
    cond: Condvar,
}

impl Signal {
    /// Makes a fresh, unset signal.
    pub fn new() -> Self {
        Signal {
            inner: Arc::new(Inner {
                set: Mutex::new(false),
                cond: Condvar::new(),
            }),
        }
    }

    /// Sets the flag and wakes every thread blocked in [`wait`](Signal::wait).
    ///
    /// The flag mutation happens under the signal's mutex, which is what
    /// establishes the happens-before edge between the setter's prior work
    /// and anything a waiter does after its wait returns.
    pub fn set(&self) {
        *self.inner.set.lock() = true;
        self.inner.cond.notify_all();
    }

    /// Blocks the calling thread until the flag is set.
    ///
    /// Returns immediately if the flag is already set. This call suspends
    /// only inside the condition variable, which atomically releases the
    /// mutex while suspended and reacquires it before the flag is re-checked.
    pub fn wait(&self) {
        let mut set = self.inner.set.lock();
        while !*set {
            set = self.inner.cond.wait(set);
        }
    }

    /// Whether the flag has been set.
    pub fn is_set(&self) -> bool {
        *self.inner.set.lock()
    }

    /// Wakes waiters without setting the flag. A correct waiter must treat
    /// this exactly like a spurious wakeup and keep waiting.
    #[cfg(test)]
    fn notify_without_set(&self) {
        self.inner.cond.notify_all();
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Signal;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn set_before_wait_does_not_block() {
        let signal = Signal::new();
        signal.set();

        let (tx, rx) = mpsc::channel();
        let waiter = thread::spawn({
            let signal = signal.clone();
            move || {
                signal.wait();
                tx.send(()).unwrap();
            }
        });

        rx.recv_timeout(Duration::from_secs(5))
            .expect("waiter stayed blocked on an already-set signal");
        waiter.join().unwrap();
    }

    #[test]
    fn wakeup_without_set_keeps_waiting() {
        let signal = Signal::new();

        let (tx, rx) = mpsc::channel();
        let waiter = thread::spawn({
            let signal = signal.clone();
            move || {
                signal.wait();
                tx.send(()).unwrap();
            }
        });

        // Give the waiter time to block, then wake it spuriously.
        thread::sleep(Duration::from_millis(50));
        signal.notify_without_set();

        assert!(
            rx.recv_timeout(Duration::from_millis(200)).is_err(),
            "waiter proceeded past a wakeup with the flag still unset"
        );

        signal.set();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        waiter.join().unwrap();
    }

    #[test]
    fn flag_is_monotonic() {
        let signal = Signal::new();
        assert!(!signal.is_set());

        signal.set();
        assert!(signal.is_set());

        // Redundant sets and repeated waits are harmless no-ops.
        signal.set();
        signal.wait();
        signal.wait();
        assert!(signal.is_set());
    }

    #[test]
    fn wait_observes_work_done_before_set() {
        let signal = Signal::new();
        let work_done = Arc::new(AtomicBool::new(false));

        let waiter = thread::spawn({
            let signal = signal.clone();
            let work_done = work_done.clone();
            move || {
                signal.wait();
                assert!(
                    work_done.load(Ordering::SeqCst),
                    "wait returned before the signaling thread finished its work"
                );
            }
        });

        thread::sleep(Duration::from_millis(50));
        work_done.store(true, Ordering::SeqCst);
        signal.set();
        waiter.join().unwrap();
    }
}
