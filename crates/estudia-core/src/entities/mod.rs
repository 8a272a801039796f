//! Entity structs for the Estudia domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! presentation-layer consumption.

mod message;
mod session;
mod user;

pub use message::Message;
pub use session::{DEFAULT_SESSION_NAME, Session};
pub use user::{User, UserProfile};
