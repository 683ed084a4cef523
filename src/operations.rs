use std::path::Path;

use crate::error::Error;
use crate::resolved::ResolvedFile;

/// Print the resolution state of one pin
pub fn show(resolved_path: &Path, name: &str) -> Result<(), Error> {
    let resolved = ResolvedFile::load(resolved_path)?;
    let state = resolved.read_dependency(name)?;
    println!("{}", state);
    Ok(())
}

/// Print the number of pins in the file
pub fn count(resolved_path: &Path) -> Result<(), Error> {
    let resolved = ResolvedFile::load(resolved_path)?;
    println!("{}", resolved.number_of_dependencies());
    Ok(())
}

/// Set the resolution state of one pin, then save the file.
// Note: we save even when the pin was already up-to-date. The
// automation flow is "load, mutate, save", and the canonical dump
// makes the write a byte-wise no-op for files that are already in
// canonical form.
pub fn update(
    resolved_path: &Path,
    name: &str,
    new_branch: Option<String>,
    new_revision: Option<String>,
    new_version: Option<String>,
) -> Result<(), Error> {
    let mut resolved = ResolvedFile::load(resolved_path)?;
    resolved.update_dependency(name, new_branch, new_revision, new_version)?;
    resolved.save()
}
