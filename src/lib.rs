use serde::{Deserialize, Serialize};

use events::{EventSpec, WILDCARD};

pub mod adapters;
pub mod events;
pub mod stamp;

/// The single extension point of the crate. A destination (file, database,
/// console, network sink, ...) implements `write` and nothing else.
pub trait LogAdapter {
    /// Persist one entry. Return `false` if the entry was not actually
    /// written for any adapter-specific reason, `true` otherwise.
    fn write(&mut self, entry: &LogEntry) -> bool;

    /// Hook run before the owning logger applies its initial configuration.
    fn pre_configure(&mut self) {}

    /// Hook run after the owning logger applies its initial configuration.
    fn post_configure(&mut self) {}
}

/// One logged event, handed to the adapter. The core never keeps these;
/// whatever happens to an entry after `write` is the adapter's business.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Timestamp already formatted per the logger's microtime setting.
    pub time: String,
    /// Name of the logical source of the event.
    pub class: String,
    /// Free-form event type, e.g. "info" or "critical".
    pub event: String,
    pub description: String,
}

/// Event-filtering front end over a [`LogAdapter`].
///
/// Holds the list of recognized event types (default: the `"*"` wildcard,
/// which matches everything) and the timestamp precision flag, and forwards
/// eligible entries to the adapter. Configuration may be changed at any time
/// and governs the very next `save`.
///
/// A single instance is not synchronized; callers sharing one across threads
/// wrap it in a lock themselves.
pub struct EventLogger<A: LogAdapter> {
    events: Vec<String>,
    microtime: bool,
    adapter: A,
}

impl<A: LogAdapter> EventLogger<A> {
    /// Logger with the default configuration: all events recognized,
    /// second-precision timestamps.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, WILDCARD, false)
    }

    /// Logger with an explicit configuration. The adapter's `pre_configure`
    /// and `post_configure` hooks run around applying it.
    pub fn with_config(mut adapter: A, events: impl Into<EventSpec>, microtime: bool) -> Self {
        adapter.pre_configure();
        let mut logger = Self {
            events: Vec::new(),
            microtime: false,
            adapter,
        };
        logger.set_events(events);
        logger.set_microtime(microtime);
        logger.adapter.post_configure();
        logger
    }

    /// Replaces the list of recognized event types. A comma-separated string
    /// is split and trimmed; a list is stored verbatim. See [`EventSpec`].
    pub fn set_events(&mut self, spec: impl Into<EventSpec>) {
        self.events = spec.into().into_events();
    }

    /// The recognized event types, in the order stored.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Turns on decimal-microsecond timestamps. This is a latch: passing
    /// `false` leaves the flag untouched, so once on it stays on.
    pub fn set_microtime(&mut self, microtime: bool) {
        if microtime {
            self.microtime = microtime;
        }
    }

    /// Saves an event through the adapter, provided its type is recognized.
    ///
    /// An event is eligible when `event` itself or the `"*"` wildcard is in
    /// the recognized list. Returns the adapter's result for eligible events
    /// and `false` for filtered ones; the adapter is called at most once and
    /// never for a filtered event.
    pub fn save(&mut self, class: &str, event: &str, description: &str) -> bool {
        let eligible = self.events.iter().any(|e| e == event)
            || self.events.iter().any(|e| e == WILDCARD);
        if !eligible {
            return false;
        }
        let entry = LogEntry {
            time: self.timestamp(),
            class: class.to_owned(),
            event: event.to_owned(),
            description: description.to_owned(),
        };
        self.adapter.write(&entry)
    }

    /// The current local time as `YYYY-MM-DDTHH:MM:SS`, with a decimal
    /// microsecond fraction appended when microtime is on.
    pub fn timestamp(&self) -> String {
        stamp::format_timestamp(chrono::Local::now(), self.microtime)
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }
}
