//! Write workflows: stage a change, then commit it if the client reports
//! pending changes.

use super::client::ArtifactClient;
use super::error::{ActionError, ClientError, ValidationError};
use super::rename::RenameRequest;
use crate::config::{PLACEHOLDER_FILE, UPLOAD_COMMIT_MESSAGE};
use crate::models::CommitId;
use crate::utils::format::join_path;

/// Validate a single new entry name (file or folder).
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.contains('/') || name == "." || name == ".." || name == PLACEHOLDER_FILE {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Commit staged changes with `message` if there are any.
async fn commit_if_pending<C>(client: &C, message: &str) -> Result<Option<CommitId>, ClientError>
where
    C: ArtifactClient + ?Sized,
{
    if client.has_pending_changes() {
        client.commit(message).await.map(Some)
    } else {
        Ok(None)
    }
}

/// Create an empty file named `name` in `folder`. Returns its path.
pub async fn create_file<C>(client: &C, folder: &str, name: &str) -> Result<String, ActionError>
where
    C: ArtifactClient + ?Sized,
{
    let name = validate_name(name)?;
    let path = join_path(folder, name);
    client.write_text_file(&path, "")?;
    commit_if_pending(client, &format!("Add file {}", name)).await?;
    Ok(path)
}

/// Create a folder named `name` in `folder` by writing its placeholder file.
/// Returns the folder path.
pub async fn create_folder<C>(client: &C, folder: &str, name: &str) -> Result<String, ActionError>
where
    C: ArtifactClient + ?Sized,
{
    let name = validate_name(name)?;
    let dir = join_path(folder, name);
    client.write_text_file(&join_path(&dir, PLACEHOLDER_FILE), "")?;
    commit_if_pending(client, &format!("Add folder {}", name)).await?;
    Ok(dir)
}

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Write every file into `folder` and commit them together.
///
/// Returns the number of files written. All names are validated before the
/// first write.
pub async fn upload<C>(client: &C, folder: &str, files: &[UploadFile]) -> Result<usize, ActionError>
where
    C: ArtifactClient + ?Sized,
{
    if files.is_empty() {
        return Ok(0);
    }
    for file in files {
        validate_name(&file.name)?;
    }
    for file in files {
        let path = join_path(folder, file.name.trim());
        client.write_binary_file(&path, &file.bytes)?;
    }
    commit_if_pending(client, UPLOAD_COMMIT_MESSAGE).await?;
    Ok(files.len())
}

/// Move `request.from` to `request.to` and commit the move.
///
/// Returns the new path.
pub async fn rename<C>(client: &C, request: &RenameRequest) -> Result<String, ActionError>
where
    C: ArtifactClient + ?Sized,
{
    client.move_file(&request.from, &request.to)?;
    commit_if_pending(client, &request.commit_message()).await?;
    Ok(request.to.clone())
}
