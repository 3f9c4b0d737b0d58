//! List Core
//!
//! Layered like the app that drives it:
//! - model: items, edit session, labels
//! - surface: capability traits for display, storage and prompts
//! - controller: the event-driven list controller
//! - headless: in-memory implementations of the traits

mod codec;
mod config;
mod controller;
mod error;
mod event;
mod filter;
mod model;
mod surface;

pub mod headless;

pub use codec::{decode_items, encode_items};
pub use config::ListConfig;
pub use controller::ListController;
pub use error::{ListError, ListResult};
pub use event::{ClickTarget, ListEvent};
pub use filter::matches_filter;
pub use model::{ActionLabel, Decision, EditSession, Entry, Visibility};
pub use surface::{DisplaySurface, PersistenceSlot, UserPrompt};
