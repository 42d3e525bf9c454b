//! Browser Event Loop
//!
//! `setTimeout` through gloo-timers and futures through `spawn_local`.

use gloo_timers::callback::Timeout;
use playboard::{EventLoop, LocalTask, TimerHandle};
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserEventLoop;

impl EventLoop for BrowserEventLoop {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, callback);
        // Dropping a gloo Timeout clears it
        TimerHandle::new(move || drop(timeout))
    }

    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
