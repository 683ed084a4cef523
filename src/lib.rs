use std::path::PathBuf;

mod cmd;
mod error;
mod operations;
mod resolved;
mod ui;

pub use crate::cmd::{Command, SubCommand};
pub use crate::error::*;
pub use crate::resolved::{
    Pin, PinList, ResolutionState, ResolvedDocument, ResolvedFile, RESOLVED_FILE_NAME,
    SUPPORTED_RESOLVED_VERSION,
};
pub use crate::ui::{print_error, print_info_1, print_info_2, print_warning};

pub fn run(cmd: Command) -> Result<(), Error> {
    let resolved_path = if let Some(p) = &cmd.resolved_path {
        PathBuf::from(p)
    } else {
        PathBuf::from(RESOLVED_FILE_NAME)
    };

    match &cmd.sub_cmd {
        SubCommand::Show { name } => operations::show(&resolved_path, name),
        SubCommand::Count {} => operations::count(&resolved_path),
        SubCommand::Update {
            name,
            branch,
            revision,
            version,
        } => operations::update(
            &resolved_path,
            name,
            branch.clone(),
            revision.clone(),
            version.clone(),
        ),
    }
}
