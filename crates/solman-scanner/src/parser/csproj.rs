//! Project descriptor (`.csproj`) parser
//!
//! Legacy descriptors carry `<TargetFrameworkVersion>`, SDK-style ones carry
//! `<TargetFramework>`. Element names are matched on their local part so the
//! MSBuild namespace on legacy files does not matter.

use crate::error::{ScanError, ScanResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Field read first
pub const PRIMARY_FRAMEWORK_FIELD: &str = "TargetFrameworkVersion";

/// Field read when the primary one is absent
pub const SECONDARY_FRAMEWORK_FIELD: &str = "TargetFramework";

/// Read and parse the descriptor at `path`
///
/// # Errors
/// Returns `UnparseableDescriptor` if the file cannot be read or parsed and
/// `FrameworkFieldMissing` if neither framework field is present.
pub fn read_target_framework(path: &Path) -> ScanResult<String> {
    let content = fs::read_to_string(path).map_err(|e| ScanError::UnparseableDescriptor {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_target_framework(path, &content)
}

/// Resolve the target framework from descriptor content
///
/// The whole document is read so that malformed markup after the framework
/// element is still reported.
///
/// # Errors
/// Returns `UnparseableDescriptor` on malformed markup and
/// `FrameworkFieldMissing` if neither field has a value.
pub fn parse_target_framework(path: &Path, content: &str) -> ScanResult<String> {
    let unparseable = |reason: String| ScanError::UnparseableDescriptor {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = Reader::from_str(content);
    let mut primary: Option<String> = None;
    let mut secondary: Option<String> = None;
    let mut saw_root = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                saw_root = true;
                depth += 1;
                let local = e.local_name();
                let slot = if local.as_ref() == PRIMARY_FRAMEWORK_FIELD.as_bytes() {
                    Some(&mut primary)
                } else if local.as_ref() == SECONDARY_FRAMEWORK_FIELD.as_bytes() {
                    Some(&mut secondary)
                } else {
                    None
                };
                if let Some(slot) = slot {
                    let raw = reader
                        .read_text(e.name())
                        .map_err(|err| unparseable(err.to_string()))?;
                    let text = quick_xml::escape::unescape(&raw)
                        .map_err(|err| unparseable(err.to_string()))?;
                    if slot.is_none() && !text.is_empty() {
                        *slot = Some(text.into_owned());
                    }
                    depth -= 1;
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(unparseable(format!(
                    "{e} at position {}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(unparseable("no root element".to_string()));
    }
    if depth > 0 {
        return Err(unparseable("unexpected end of document".to_string()));
    }

    primary
        .or(secondary)
        .ok_or_else(|| ScanError::FrameworkFieldMissing(path.to_path_buf()))
}
