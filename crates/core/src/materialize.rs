//! Writing a rendered notebook to disk.
//!
//! ```text
//! START -> CHECK_EXISTS -> CONFIRM -> ABORTED
//!                       \-> PROCEED -> WRITE -> OPEN_ATTEMPT -> DONE
//!                                          \-> DONE
//! ```
//!
//! Each step is a one-shot decision; nothing is retried. The write is
//! reported (see [`materialize_with`]) before the open attempt starts, since a
//! terminal editor can hold the process for as long as the user edits.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::confirm::{Confirm, is_affirmative};
use crate::error::{Result, TidyError};
use crate::fs::atomic_write;
use crate::open::{Opener, OpenerCommand};
use crate::templates::{LoadedTemplate, RenderContext, render};

#[derive(Debug, Clone)]
pub struct TemplateRequest {
    pub destination: PathBuf,
    pub data: RenderContext,
    /// Replace an existing file without asking.
    pub overwrite: bool,
    pub open_after_write: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenStatus {
    NotRequested,
    Opened(OpenerCommand),
    /// Every opener failed; the user has to open the file themselves.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeOutcome {
    Created { path: PathBuf, open: OpenStatus },
    /// The file existed and the user did not confirm; nothing was written.
    Declined { path: PathBuf },
}

pub fn overwrite_prompt(path: &Path) -> String {
    format!("File {} already exists. Overwrite? (y/n): ", path.display())
}

pub fn materialize(
    request: &TemplateRequest,
    template: &LoadedTemplate,
    confirm: &mut dyn Confirm,
    opener: &mut dyn Opener,
) -> Result<MaterializeOutcome> {
    materialize_with(request, template, confirm, opener, &mut |_| {})
}

/// [`materialize`], calling `on_written` once the file is on disk and before
/// any opener runs. Not called on decline or error.
pub fn materialize_with(
    request: &TemplateRequest,
    template: &LoadedTemplate,
    confirm: &mut dyn Confirm,
    opener: &mut dyn Opener,
    on_written: &mut dyn FnMut(&Path),
) -> Result<MaterializeOutcome> {
    let path = &request.destination;

    if path.exists() {
        if request.overwrite {
            debug!("Overwriting existing file {}", path.display());
        } else {
            let response = confirm.ask(&overwrite_prompt(path)).map_err(TidyError::Prompt)?;
            if !is_affirmative(&response) {
                info!("Kept existing file {}", path.display());
                return Ok(MaterializeOutcome::Declined { path: path.clone() });
            }
        }
    }

    let rendered = render(template, &request.data)?;

    atomic_write(path, rendered.as_bytes())
        .map_err(|source| TidyError::Filesystem { path: path.clone(), source })?;
    info!(
        "Wrote {} ({} bytes) from template '{}'",
        path.display(),
        rendered.len(),
        template.logical_name
    );
    on_written(path);

    let open = if request.open_after_write {
        match opener.open(path) {
            Some(cmd) => OpenStatus::Opened(cmd),
            None => {
                warn!("Could not open {}; open it manually", path.display());
                OpenStatus::Unavailable
            }
        }
    } else {
        OpenStatus::NotRequested
    };

    Ok(MaterializeOutcome::Created { path: path.clone(), open })
}
