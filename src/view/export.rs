//! Static export: one linked page per turn.
//!
//! Export replays navigation: it selects the first turn, writes the page,
//! then steps `Next` until the controller refuses to move.

use crate::state::Direction;
use crate::view::page::{HtmlPage, NavLinks};
use crate::view::surface::ElementId;
use crate::view::Stepper;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Landing page written next to the turn pages.
pub const INDEX_FILE: &str = "index.html";

/// Errors that can occur while writing exported pages.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A page could not be written.
    #[error("Failed to write page {path:?}: {source}")]
    Write {
        /// Page file that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// File name of the page for turn `index` (0-based), e.g. `turn-001.html`.
pub fn turn_file_name(index: usize) -> String {
    format!("turn-{:03}.html", index + 1)
}

/// Link from one exported page to the content of another.
fn turn_link(index: usize) -> String {
    format!("{}#{}", turn_file_name(index), ElementId::Content.id())
}

/// Write the stepper's pages into `out_dir`.
///
/// With turns loaded, writes `turn-001.html` … and an `index.html` copy of the
/// first page. With no turns (empty transcript or failed load) only
/// `index.html` is written, showing whatever state the page is in.
///
/// Returns the written paths, index first.
///
/// # Errors
///
/// Returns `ExportError` if the directory or a page cannot be written.
pub fn export_turns(
    stepper: &mut Stepper<HtmlPage>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let index_path = out_dir.join(INDEX_FILE);
    let mut written = vec![index_path.clone()];

    if stepper.state().turn_count() == 0 {
        write_page(&index_path, stepper.surface())?;
        info!(pages = 1, out_dir = %out_dir.display(), "Exported transcript without turns");
        return Ok(written);
    }

    stepper.select(0);
    loop {
        let Some(index) = stepper.state().cursor() else {
            break;
        };

        let state = stepper.state();
        let links = NavLinks {
            previous: state.can_go_previous().then(|| turn_link(index - 1)),
            next: state.can_go_next().then(|| turn_link(index + 1)),
        };
        stepper.surface_mut().set_links(links);

        let path = out_dir.join(turn_file_name(index));
        write_page(&path, stepper.surface())?;
        if index == 0 {
            write_page(&index_path, stepper.surface())?;
        }
        written.push(path);

        if !stepper.navigate(Direction::Next) {
            break;
        }
    }

    info!(pages = written.len(), out_dir = %out_dir.display(), "Exported transcript");
    Ok(written)
}

fn write_page(path: &Path, page: &HtmlPage) -> Result<(), ExportError> {
    fs::write(path, page.to_html()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
