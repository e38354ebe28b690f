pub mod provider_id;
pub mod rating_entry;

pub use provider_id::*;
pub use rating_entry::*;
