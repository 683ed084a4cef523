use std::path::{Path, PathBuf};

use crate::error::*;
use crate::resolved::dump::dump;
use crate::resolved::schema::{ResolutionState, ResolvedDocument, SUPPORTED_RESOLVED_VERSION};
use crate::ui::*;

/// Abstracts operations on a `Package.resolved` file.
///
/// Owns the path and the parsed document. All reads and mutations go
/// through the handle; nothing touches the disk again until `save()`.
/// Pins can never be added or removed, only their resolution state
/// changes.
pub struct ResolvedFile {
    path: PathBuf,
    document: ResolvedDocument,
}

impl ResolvedFile {
    /// Open and parse the `Package.resolved` file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        print_info_1(&format!("Opening {}", path.display()));
        let contents = std::fs::read_to_string(path).map_err(|e| new_read_error(e, path))?;
        Self::from_string(path, &contents)
    }

    /// Parse `contents` as a resolved document belonging to `path`.
    // Note: `path` is only used for error messages and as the
    // destination of `save()`
    pub fn from_string(path: &Path, contents: &str) -> Result<Self, Error> {
        let document: ResolvedDocument =
            serde_json::from_str(contents).map_err(|e| Error::MalformedResolved {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        if document.version != SUPPORTED_RESOLVED_VERSION {
            return Err(Error::UnsupportedResolvedVersion {
                path: path.to_path_buf(),
                found: document.version,
                supported: SUPPORTED_RESOLVED_VERSION,
            });
        }
        Ok(ResolvedFile {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Set the resolution state of the pin named `package_name`.
    ///
    /// All three fields are overwritten, `None` meaning an explicit
    /// `null` — so passing `None` for a field that held a value clears
    /// it. Returns true if the stored state actually changed.
    pub fn update_dependency(
        &mut self,
        package_name: &str,
        new_branch: Option<String>,
        new_revision: Option<String>,
        new_version: Option<String>,
    ) -> Result<bool, Error> {
        let index = self.pin_index(package_name)?;
        let pin = &mut self.document.object.pins[index];

        let old_state = pin.state.clone();
        pin.state = ResolutionState {
            branch: new_branch,
            revision: new_revision,
            version: new_version,
        };

        if pin.state == old_state {
            print_warning(&format!("\"{}\" is already up-to-date", package_name));
            return Ok(false);
        }
        print_info_2(&format!("Updated \"{}\"", package_name));
        println!("  old: {}", old_state);
        println!("  new: {}", pin.state);
        Ok(true)
    }

    /// Return a copy of the resolution state of the pin named
    /// `package_name`. Mutating the returned value does not affect
    /// the document.
    pub fn read_dependency(&self, package_name: &str) -> Result<ResolutionState, Error> {
        let index = self.pin_index(package_name)?;
        Ok(self.document.object.pins[index].state.clone())
    }

    /// Number of pins in the document.
    pub fn number_of_dependencies(&self) -> usize {
        self.document.object.pins.len()
    }

    /// Write the document back to the path it was loaded from.
    //
    // The output matches what `swift package` itself writes: sorted
    // keys, two-space indentation, one trailing newline.
    pub fn save(&self) -> Result<(), Error> {
        print_info_2(&format!("Saving {}", self.path.display()));
        let contents = dump(&self.document)?;
        std::fs::write(&self.path, contents).map_err(|e| new_write_error(e, &self.path))
    }

    // First match wins: duplicate package names are a latent
    // inconsistency in the file, not something we validate.
    fn pin_index(&self, package_name: &str) -> Result<usize, Error> {
        self.document
            .object
            .pins
            .iter()
            .position(|p| p.package == package_name)
            .ok_or_else(|| Error::PinNotFound {
                path: self.path.clone(),
                name: package_name.to_string(),
            })
    }
}
