//! Loading audit inputs from files or stdin.

use std::io::Read;
use std::path::Path;

use crate::error_handling::AuditError;
use crate::parse::is_valid_html;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the markup for one input.
///
/// `-` reads standard input to the end. Invalid UTF-8 is replaced rather than
/// rejected, since the analyzers accept any text.
///
/// # Errors
///
/// - `AuditError::Read` if the file or stdin cannot be read
/// - `AuditError::InvalidHtml` if `require_valid_html` is set and the markup
///   fails `is_valid_html`
pub fn load_input(path: &Path, require_valid_html: bool) -> Result<String, AuditError> {
    let bytes = if path.as_os_str() == STDIN_PATH {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(|source| AuditError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        std::fs::read(path).map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let html = String::from_utf8_lossy(&bytes).into_owned();
    log::debug!("Loaded {} bytes from {}", html.len(), path.display());

    if require_valid_html && !is_valid_html(&html) {
        return Err(AuditError::InvalidHtml(path.to_path_buf()));
    }
    Ok(html)
}
