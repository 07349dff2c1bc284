use gloo_timers::callback::Timeout;

/// Something that can run a task later. Dropping the returned handle must
/// cancel the task if it has not run yet.
pub trait Schedule {
    type Handle;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

impl Schedule for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }
}

/// Runs only the most recent task, once input has been quiet for `delay_ms`.
pub struct Debouncer<S: Schedule = BrowserTimer> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Schedule> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        // dropping the handle clears the timer
        self.pending = None;
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}
