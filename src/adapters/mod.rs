//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the decision core to the world around it:
//! - `observer` - Diagnostics via `tracing`, or recorded in memory
//! - `ui` - In-memory forms, presenter and link opener

pub mod observer;
pub mod ui;

pub use observer::{InMemoryObserver, TracingObserver};
pub use ui::{InMemoryForm, InMemoryPresenter, RecordingLinkOpener};
