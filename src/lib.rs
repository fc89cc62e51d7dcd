//! Demonstration of coordinating concurrent output with a monitor — a mutex
//! paired with a condition variable — versus letting threads race for the
//! output stream.
//!
//! # Use case
//!
//! Two threads each want to write a block of text to the same stream. With a
//! per-character delay between writes and nothing coordinating the threads,
//! the two blocks interleave character by character and the result is
//! unreadable. A monitor fixes this for the ordered case: the first thread
//! writes its block, sets a flag under the monitor's mutex and notifies; the
//! second thread performs a predicate-protected wait on that flag before it
//! touches the stream at all. The second block then always appears strictly
//! after the first, no matter how the scheduler slices the two threads.
//!
//! # The three demonstrations
//!
//!   - [`demo::single_threaded`] prints both blocks from one thread: the
//!     baseline everything else is compared against.
//!
//!   - [`demo::unsynchronized`] spawns two threads that write concurrently
//!     with no coordination, making the interleaving visible. The driver uses
//!     a completion [`Signal`] as a barrier so the demonstration does not
//!     bleed into the next one.
//!
//!   - [`demo::handoff`] spawns the same two threads, but the second waits on
//!     a handoff [`Signal`] that the first sets only after finishing its
//!     block. Output is deterministic by construction.
//!
//! The waits are correct against spurious wakeups (the predicate is
//! re-checked on every wakeup) and against the signal firing before the wait
//! even begins (state is checked, not just the notification).

pub mod demo;
mod signal;
mod sink;
mod sync;
mod text;

pub use crate::signal::Signal;
pub use crate::sink::Sink;
pub use crate::text::Passage;

#[doc(no_inline)]
pub use termcolor::Color;
