use super::StageError;

/// Open `url` in the default browser.
pub fn open(url: &str) -> Result<(), StageError> {
    ::open::that(url).map_err(|e| StageError::Browser {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("opened {}", url);
    Ok(())
}
