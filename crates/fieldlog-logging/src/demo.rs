//! Sample traffic for hosts exercising the bridge
//!
//! Events are emitted through `tracing`, so they only reach a sink once a
//! [`SinkLayer`](crate::SinkLayer) is active (see [`init_logging`](crate::init_logging)).

use std::thread;
use tracing::info;

/// Events emitted per thread by the default triggers
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Background threads spawned by [`trigger_logs_with_args`]
pub const DEFAULT_THREADS: usize = 10;

/// Emit [`DEFAULT_ITERATIONS`] info events carrying `thread_id` and `i` fields
pub fn trigger_logs() {
    trigger_logs_n(DEFAULT_ITERATIONS);
}

/// Emit `iterations` info events on the calling thread
pub fn trigger_logs_n(iterations: usize) {
    let thread_id = thread::current().id();
    for i in 0..iterations {
        info!(?thread_id, i, "Hello from background thread");
    }
}

/// Emit formatted info events from [`DEFAULT_THREADS`] threads, then from the caller
pub fn trigger_logs_with_args() {
    trigger_logs_with_args_n(DEFAULT_THREADS, DEFAULT_ITERATIONS);
}

/// Emit `iterations` formatted events from each of `threads` spawned threads,
/// wait for them, then emit `iterations` more from the calling thread
pub fn trigger_logs_with_args_n(threads: usize, iterations: usize) {
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            thread::spawn(move || {
                for j in 0..iterations {
                    info!("Hello from background thread {}: {}", i, j);
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            tracing::warn!("demo thread panicked");
        }
    }

    for i in 0..iterations {
        info!("Hello from main thread: {}", i);
    }
}

#[cfg(test)]
#[path = "demo/demo_tests.rs"]
mod demo_tests;
