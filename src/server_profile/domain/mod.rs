//! Domain model for server profiles.
//!
//! The server profile domain models validated profile names, connection
//! targets and options, the capability interface through which profiles are
//! accessed, and the change event broadcast by the registry. Persistence and
//! discovery concerns are kept outside the domain boundary.

mod error;
mod event;
mod ids;
mod name;
mod options;
mod origin;
mod profile;
mod record;
mod target;

pub use error::ProfileDomainError;
pub use event::RegistryEvent;
pub use ids::ProfileId;
pub use name::ProfileName;
pub use options::ConnectionOptions;
pub use origin::ProfileOrigin;
pub use profile::{ServerProfile, StoredServerProfile};
pub use record::ProfileRecord;
pub use target::{ConnectionTarget, DEFAULT_VNC_PORT};
