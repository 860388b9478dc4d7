use std::thread;
use std::time::Duration;
use thread_priority::{set_current_thread_priority, ThreadPriority};

/// Fixed inter-send delay. Not adaptive; no feedback from the receiver.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Option<Duration>,
}

impl Pacer {
    pub fn new(delay: Option<Duration>) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    pub fn pace(&self) {
        if let Some(d) = self.delay {
            thread::sleep(d);
        }
    }
}

/// Best effort: short sleeps are less jittery at a higher priority.
pub fn boost_current_thread_priority() {
    if let Err(e) = set_current_thread_priority(ThreadPriority::Max) {
        log::debug!("could not raise sender thread priority: {e:?}");
    }
}
