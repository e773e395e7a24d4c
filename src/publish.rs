// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::PublishError;
use crate::home::HomeProps;

/// Filename of the generated page
pub const PAGE_FILENAME: &str = "index.html";

/// Filename of the props snapshot written next to the page
pub const PROPS_FILENAME: &str = "index.json";

/// Where a regeneration put its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPage {
    pub html_path: PathBuf,
    pub props_path: PathBuf,
    /// `sha256:<hex>` of the HTML
    pub content_hash: String,
}

/// Write the rendered page and its props into `output_dir`.
///
/// Both files are staged as `.partial` siblings before either is renamed into
/// place. If the page cannot be moved into place the previous props are put
/// back, so the two files always describe the same regeneration.
pub fn publish_home(
    output_dir: &Path,
    html: &str,
    props: &HomeProps,
) -> Result<PublishedPage, PublishError> {
    std::fs::create_dir_all(output_dir).map_err(|e| PublishError::CreateDirectoryFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let props_json = serde_json::to_string_pretty(props)?;
    let props_path = output_dir.join(PROPS_FILENAME);
    let html_path = output_dir.join(PAGE_FILENAME);

    let props_partial = stage(&props_path, props_json.as_bytes())?;
    let html_partial = stage(&html_path, html.as_bytes()).inspect_err(|_| {
        let _ = std::fs::remove_file(&props_partial);
    })?;

    let previous_props = std::fs::read(&props_path).ok();

    commit(&props_partial, &props_path).inspect_err(|_| {
        let _ = std::fs::remove_file(&html_partial);
    })?;

    commit(&html_partial, &html_path).inspect_err(|_| {
        restore(&props_path, previous_props.as_deref());
    })?;

    Ok(PublishedPage {
        html_path,
        props_path,
        content_hash: content_hash(html.as_bytes()),
    })
}

/// Compute the `sha256:<hex>` digest of a page
pub fn content_hash(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn stage(path: &Path, contents: &[u8]) -> Result<PathBuf, PublishError> {
    let partial = partial_path(path);

    std::fs::write(&partial, contents).map_err(|e| {
        let _ = std::fs::remove_file(&partial);
        PublishError::WriteFailed {
            path: partial.clone(),
            source: e,
        }
    })?;

    Ok(partial)
}

fn commit(partial: &Path, path: &Path) -> Result<(), PublishError> {
    std::fs::rename(partial, path).map_err(|e| {
        let _ = std::fs::remove_file(partial);
        PublishError::RenameFailed {
            from: partial.to_path_buf(),
            source: e,
        }
    })
}

/// Best effort: put back what was at `path` before, or remove it if nothing was
fn restore(path: &Path, previous: Option<&[u8]>) {
    match previous {
        Some(contents) => {
            if let Ok(partial) = stage(path, contents) {
                let _ = commit(&partial, path);
            }
        }
        None => {
            let _ = std::fs::remove_file(path);
        }
    }
}
