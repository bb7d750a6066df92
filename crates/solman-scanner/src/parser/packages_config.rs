//! Dependency descriptor (`packages.config`) parser

use crate::error::{ScanError, ScanResult};
use crate::types::Dependency;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Read the dependency descriptor at `path`
///
/// A missing file is the normal "nothing declared" case and yields `None`.
///
/// # Errors
/// Returns `MalformedDependencyDescriptor` if the file exists but cannot be
/// read or parsed.
pub fn read_packages_config(path: &Path) -> ScanResult<Option<Vec<Dependency>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| ScanError::MalformedDependencyDescriptor {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_packages_config(path, &content).map(Some)
}

/// Extract every `<package>` element in declaration order
///
/// Each element must carry `id`, `version` and `targetFramework`.
/// Duplicate ids are kept as separate entries.
///
/// # Errors
/// Returns `MalformedDependencyDescriptor` on malformed markup or a missing
/// attribute.
pub fn parse_packages_config(path: &Path, content: &str) -> ScanResult<Vec<Dependency>> {
    let malformed = |reason: String| ScanError::MalformedDependencyDescriptor {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = Reader::from_str(content);
    let mut dependencies = Vec::new();
    let mut saw_root = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                saw_root = true;
                depth += 1;
                collect_package(&e, &mut dependencies).map_err(malformed)?;
            }
            Ok(Event::Empty(e)) => {
                saw_root = true;
                collect_package(&e, &mut dependencies).map_err(malformed)?;
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(malformed(format!(
                    "{e} at position {}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(malformed("no root element".to_string()));
    }
    if depth > 0 {
        return Err(malformed("unexpected end of document".to_string()));
    }

    Ok(dependencies)
}

fn collect_package(element: &BytesStart<'_>, into: &mut Vec<Dependency>) -> Result<(), String> {
    if element.local_name().as_ref() != b"package" {
        return Ok(());
    }
    into.push(Dependency {
        name: required_attribute(element, "id")?,
        version: required_attribute(element, "version")?,
        target_framework: required_attribute(element, "targetFramework")?,
    });
    Ok(())
}

fn required_attribute(element: &BytesStart<'_>, key: &str) -> Result<String, String> {
    let attribute = element
        .try_get_attribute(key)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("package element is missing the '{key}' attribute"))?;
    attribute
        .unescape_value()
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> ScanResult<Vec<Dependency>> {
        parse_packages_config(&PathBuf::from("packages.config"), content)
    }

    #[test]
    fn test_parse_packages() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<packages>
  <package id="Newtonsoft.Json" version="12.0.3" targetFramework="net472" />
  <package id="log4net" version="2.0.8" targetFramework="net472"></package>
</packages>"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].name, "Newtonsoft.Json");
        assert_eq!(deps[0].version, "12.0.3");
        assert_eq!(deps[0].target_framework, "net472");
        assert_eq!(deps[1].name, "log4net");
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let content = r#"<packages>
  <package id="PackageA" version="1.2.0" targetFramework="net472" />
  <package id="PackageA" version="1.2.0" targetFramework="net472" />
  <package id="PackageA" version="1.3.0" targetFramework="net48" />
</packages>"#;
        assert_eq!(parse(content).unwrap().len(), 3);
    }

    #[test]
    fn test_values_are_verbatim() {
        let content = r#"<packages><package id=" Spaced " version="1.0.0-beta+1" targetFramework="NET48" /></packages>"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps[0].name, " Spaced ");
        assert_eq!(deps[0].version, "1.0.0-beta+1");
        assert_eq!(deps[0].target_framework, "NET48");
    }

    #[test]
    fn test_empty_packages() {
        assert!(parse("<packages />").unwrap().is_empty());
    }

    #[test]
    fn test_missing_attribute() {
        let content = r#"<packages><package id="PackageA" version="1.0.0" /></packages>"#;
        match parse(content) {
            Err(ScanError::MalformedDependencyDescriptor { reason, .. }) => {
                assert!(reason.contains("targetFramework"));
            }
            other => panic!("expected malformed descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_markup() {
        let content = r#"<packages><package id="A" version="1" targetFramework="net48"></packages>"#;
        assert!(matches!(
            parse(content),
            Err(ScanError::MalformedDependencyDescriptor { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let result = read_packages_config(&PathBuf::from("/definitely/not/here/packages.config"));
        assert!(matches!(result, Ok(None)));
    }
}
