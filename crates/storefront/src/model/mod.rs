//! Records and payloads for every storefront resource. The
//! [`ActorEntity`](storefront_actor::ActorEntity) implementations live next to each
//! actor.

pub mod account;
pub mod blog;
pub mod catalog;
pub mod ledger;
pub mod profile;

pub use account::*;
pub use blog::*;
pub use catalog::*;
pub use ledger::*;
pub use profile::*;
