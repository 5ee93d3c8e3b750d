//! Report settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Settings controlling how issues are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Separator placed between the columns of a row.
    pub separator: String,
    /// Delimiter used when a column holds a list (labels, versions).
    pub delimiter: String,
    /// Whether to render a row per comment below each issue.
    pub show_comments: bool,
    /// Text rendered for empty columns.
    pub empty_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            delimiter: ", ".to_string(),
            show_comments: false,
            empty_placeholder: String::new(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// The separator must be non-empty, and no setting that ends up in the
    /// output may contain a newline.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "separator cannot be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("separator", &self.separator),
            ("delimiter", &self.delimiter),
            ("empty_placeholder", &self.empty_placeholder),
        ] {
            if value.contains('\n') {
                return Err(ConfigError::ValidationError(format!(
                    "{} cannot contain a newline",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.separator, "\t");
        assert_eq!(settings.delimiter, ", ");
        assert!(!settings.show_comments);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let settings = Settings {
            separator: String::new(),
            ..Settings::default()
        };

        let result = settings.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("separator cannot be empty"));
    }

    #[test]
    fn test_newline_delimiter_rejected() {
        let settings = Settings {
            delimiter: "\n".to_string(),
            ..Settings::default()
        };

        let result = settings.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("delimiter cannot contain a newline"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("show_comments = true").unwrap();
        assert!(settings.show_comments);
        assert_eq!(settings.separator, "\t");
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            separator: " | ".to_string(),
            ..Settings::default()
        };

        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, settings);
    }
}
