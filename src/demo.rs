//! The three demonstrations, meant to be run in sequence against one shared
//! [`Sink`].
//!
//! Each threaded demonstration creates its own fresh [`Signal`], so no run
//! can observe a stale already-set flag left behind by an earlier one. The
//! spawned threads are scoped and joined before the demonstration returns;
//! the signals carry the ordering guarantees, the joins merely keep one
//! demonstration from overlapping the next.

use crate::{Passage, Signal, Sink};
use std::thread;
use std::time::Duration;

/// Prints both passages from the calling thread.
///
/// No concurrency, no coordination needed: this is what the output is
/// supposed to look like, for comparison with the runs below.
pub fn single_threaded(sink: &Sink, first: &Passage, second: &Passage) {
    heading(sink, "Displaying texts on a single thread:");
    for passage in [first, second] {
        heading(sink, &passage.title);
        write!(sink, "{}", passage.body);
        writeln!(sink);
    }
}

/// Spawns two threads that each write their passage with no coordination.
///
/// Both threads print their label immediately and then spell their body out
/// slowly. Nothing orders the two, so with a non-zero `delay` the bodies are
/// expected (though not guaranteed) to interleave character by character.
///
/// The second thread sets a completion signal when it finishes, and the
/// calling thread blocks on that signal before the scope joins — the barrier
/// that keeps leftover writers from running into the next demonstration.
pub fn unsynchronized(sink: &Sink, first: &Passage, second: &Passage, delay: Duration) {
    heading(sink, "Displaying texts with no coordination:");
    let done = Signal::new();
    thread::scope(|s| {
        s.spawn(|| {
            heading(sink, &first.title);
            sink.spell_out(&first.body, delay);
        });
        s.spawn(|| {
            heading(sink, &second.title);
            sink.spell_out(&second.body, delay);
            done.set();
        });
        done.wait();
    });
    writeln!(sink);
}

/// Spawns the same two threads, ordered by a handoff signal.
///
/// The first thread writes immediately; only after its last character is out
/// does it set the signal. The second thread waits on the signal before its
/// first write, so its block always lands strictly after the first thread's,
/// independent of the `delay` chosen. The signal's mutex protects the flag
/// alone — the second thread holds no lock while spelling its body out.
///
/// If the first thread has already set the signal by the time the second
/// starts waiting, the wait returns without blocking.
pub fn handoff(sink: &Sink, first: &Passage, second: &Passage, delay: Duration) {
    heading(sink, "Displaying texts in order with a handoff:");
    let ready = Signal::new();
    thread::scope(|s| {
        s.spawn(|| {
            heading(sink, &first.title);
            sink.spell_out(&first.body, delay);
            writeln!(sink);
            ready.set();
        });
        s.spawn(|| {
            ready.wait();
            heading(sink, &second.title);
            sink.spell_out(&second.body, delay);
        });
    });
    writeln!(sink);
}

fn heading(sink: &Sink, text: &str) {
    sink.bold();
    writeln!(sink, "{}", text);
    sink.reset_color();
}
