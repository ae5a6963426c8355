use crate::{LogAdapter, LogEntry};

/// Fans every entry out to a set of adapters. The write reports success
/// only when every adapter reported success; all of them are attempted
/// regardless.
#[derive(Default)]
pub struct MultiAdapter {
    adapters: Vec<Box<dyn LogAdapter + Send>>,
}

impl MultiAdapter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_adapter<A: LogAdapter + Send + 'static>(mut self, adapter: A) -> Self {
        self.adapters.push(Box::new(adapter));
        self
    }
}

impl LogAdapter for MultiAdapter {
    fn write(&mut self, entry: &LogEntry) -> bool {
        let mut res = true;
        for adapter in &mut self.adapters {
            res = adapter.write(entry) && res;
        }
        res
    }

    fn pre_configure(&mut self) {
        for adapter in &mut self.adapters {
            adapter.pre_configure();
        }
    }

    fn post_configure(&mut self) {
        for adapter in &mut self.adapters {
            adapter.post_configure();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::MultiAdapter;
    use crate::adapters::NullAdapter;
    use crate::{EventLogger, LogAdapter, LogEntry};

    struct CountingAdapter {
        writes: Arc<AtomicUsize>,
        result: bool,
    }

    impl LogAdapter for CountingAdapter {
        fn write(&mut self, _entry: &LogEntry) -> bool {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.result
        }
    }

    #[test]
    fn every_adapter_sees_every_entry() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let multi = MultiAdapter::new()
            .with_adapter(CountingAdapter {
                writes: first.clone(),
                result: true,
            })
            .with_adapter(CountingAdapter {
                writes: second.clone(),
                result: true,
            })
            .with_adapter(NullAdapter::new());
        let mut log = EventLogger::new(multi);
        assert!(log.save("engine", "info", "fanned out"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn one_failure_fails_the_write_but_not_the_fan_out() {
        let failing = Arc::new(AtomicUsize::new(0));
        let trailing = Arc::new(AtomicUsize::new(0));
        let multi = MultiAdapter::new()
            .with_adapter(CountingAdapter {
                writes: failing.clone(),
                result: false,
            })
            .with_adapter(CountingAdapter {
                writes: trailing.clone(),
                result: true,
            });
        let mut log = EventLogger::new(multi);
        assert!(!log.save("engine", "info", "partial"));
        assert_eq!(failing.load(Ordering::SeqCst), 1);
        assert_eq!(trailing.load(Ordering::SeqCst), 1);
    }
}
