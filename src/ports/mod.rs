//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the decision core and the page around it. Adapters implement these ports.
//!
//! ## UI Ports
//!
//! - `FormReader` - Reads raw form submissions
//! - `ResultPresenter` - Shows sections, results, notices
//!
//! ## Outbound Ports
//!
//! - `LinkOpener` - Opens the mail client and the booking page
//! - `SessionObserver` - Diagnostic hook for pipeline and flow events

mod form_reader;
mod link_opener;
mod result_presenter;
mod session_observer;

pub use form_reader::FormReader;
pub use link_opener::{LinkOpenError, LinkOpener, LinkTarget};
pub use result_presenter::{FormKind, Notice, NoticeKind, ResultPresenter};
pub use session_observer::SessionObserver;
