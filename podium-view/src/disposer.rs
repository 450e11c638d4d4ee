//! Scoped resource cleanup
//!
//! Every listener registration and frame schedule hands back a [`Disposer`];
//! the controller aggregates them in a [`DisposerStack`] and runs all of
//! them exactly once, in reverse order of acquisition, on teardown.

/// A cleanup action that runs at most once
pub struct Disposer {
    action: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    /// Wrap a cleanup action
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// Run the cleanup action now
    pub fn run(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.run();
    }
}

/// Aggregates disposers and unwinds them in reverse acquisition order
#[derive(Default)]
pub struct DisposerStack {
    disposers: Vec<Disposer>,
    disposed: bool,
}

impl DisposerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cleanup action
    ///
    /// Actions pushed after disposal run immediately; nothing may outlive
    /// the teardown.
    pub fn push(&mut self, mut disposer: Disposer) {
        if self.disposed {
            disposer.run();
        } else {
            self.disposers.push(disposer);
        }
    }

    /// Run all cleanups, newest first
    pub fn dispose_all(&mut self) {
        self.disposed = true;
        while let Some(mut disposer) = self.disposers.pop() {
            disposer.run();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for DisposerStack {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
