use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Identifier prefixes are spliced into ids verbatim, so they must already be slugs.
pub fn validate_slug(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if crate::parser::text::slugify(value) != value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must contain only lowercase letters, digits and inner hyphens"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value appears more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("base_dir", "tmp/southfork").is_ok());
        assert!(validate_path("base_dir", "").is_err());
        assert!(validate_path("base_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("id_prefix", "sfg").is_ok());
        assert!(validate_slug("id_prefix", "south-fork").is_ok());
        assert!(validate_slug("id_prefix", "SFG").is_err());
        assert!(validate_slug("id_prefix", "-sfg").is_err());
        assert!(validate_slug("id_prefix", "  ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("sources.path", ["a.html", "b.html"]).is_ok());
        assert!(validate_unique("sources.path", ["a.html", "a.html"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        let empty: Vec<String> = vec![];
        assert!(matches!(
            validate_non_empty_list("sources", &empty),
            Err(EtlError::MissingConfigError { .. })
        ));
        assert!(validate_non_empty_list("sources", &["x"]).is_ok());
    }
}
