//! Single-process reference backend implementing every collaborator trait.

mod backend;
mod collaborators;
mod memory_state;
mod permission_grant;

pub use backend::MemoryBackend;
pub use memory_state::{BUILT_IN_STRATEGIES, MemoryState};
pub use permission_grant::PermissionGrant;
