//! Headless UI adapters: forms, presenter and link opener kept in memory.

mod in_memory_form;
mod in_memory_presenter;
mod recording_link_opener;

pub use in_memory_form::InMemoryForm;
pub use in_memory_presenter::InMemoryPresenter;
pub use recording_link_opener::RecordingLinkOpener;
