//! Homepage content manager.
//!
//! A bounded, ordered collection of typed sections. Validation and order
//! normalization happen on write; the store owns the persisted envelope.

mod collection;
mod defaults;
mod editor;
mod order;
mod store;
mod validate;
mod view;

pub use defaults::*;
pub use editor::*;
pub use store::*;
pub use view::*;
