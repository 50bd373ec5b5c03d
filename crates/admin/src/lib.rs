//! PawHub admin console data layer.
//!
//! The generic resource-state synchronization layer shared by every
//! admin list view (users, shelters, pet shops, clinics, transactions,
//! platform stats):
//!
//! - [`store::AdminStore`] - process-wide reactive state, one cell per
//!   entity kind plus the single shared error slot
//! - [`console::AdminConsole`] - the access facade; the only component
//!   that calls the transport and writes normalized outcomes into the
//!   store
//! - [`normalize`] - collapses heterogeneous backend failures into one
//!   user-facing message
//! - [`transport`] - the request seam; `reqwest` in production,
//!   scripted mocks in tests
//! - [`view`] - the snapshot triple and display rules every list view
//!   renders identically
//!
//! # Example
//!
//! ```rust,ignore
//! use pawhub_admin::{AdminApiConfig, AdminConsole, ListQuery};
//!
//! let config = AdminApiConfig::load()?;
//! let console = AdminConsole::from_config(&config)?;
//!
//! if console.fetch_shelters(&ListQuery::page(1)).await {
//!     let shelters = console.store().shelters().snapshot();
//!     println!("{}", shelters.count_label("shelter", "shelters"));
//! } else if let Some(message) = console.store().error() {
//!     eprintln!("{message}");
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod console;
pub mod models;
pub mod normalize;
pub mod store;
pub mod transport;
pub mod view;

pub use config::{AdminApiConfig, ConfigError};
pub use console::{AdminConsole, ListQuery};
pub use normalize::{GENERIC_ERROR_MESSAGE, normalize_error};
pub use store::{AdminStore, ResourceCell, StatsCell};
pub use transport::{HttpTransport, Transport, TransportError};
pub use view::{ListSnapshot, PAGE_SIZE};
