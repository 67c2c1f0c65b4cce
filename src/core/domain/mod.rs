//! Domain types.

mod recipient;
mod record;

pub use recipient::RecipientKeyRef;
pub use record::{Record, RecordSet};
