mod dump;
mod handle;
mod schema;

pub use handle::ResolvedFile;
pub use schema::{Pin, PinList, ResolutionState, ResolvedDocument, SUPPORTED_RESOLVED_VERSION};

pub const RESOLVED_FILE_NAME: &str = "Package.resolved";
