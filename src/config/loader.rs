//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! compensation policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::CompensationPolicy;

/// Name of the policy file inside a configuration directory.
const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the compensation policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ee/
/// └── policy.yaml   # Compensation policy
/// ```
///
/// # Example
///
/// ```no_run
/// use sick_leave_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ee").unwrap();
/// println!("Waiting days: {}", loader.policy().waiting_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: CompensationPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified configuration directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ee")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - a value is unusable for calculation (`InvalidPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sick_leave_calculator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ee")?;
    /// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let path_str = policy_path.display().to_string();

        let content =
            fs::read_to_string(&policy_path).map_err(|_| CalculatorError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, policy = %loader.policy.name, "Loaded compensation policy");
        Ok(loader)
    }

    /// Parses a policy from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use sick_leave_calculator::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// name: Custom
    /// income_replacement_rate: 0.7
    /// bank_month_days: 30
    /// net_of_tax_factor: 0.8
    /// waiting_days: 3
    /// employer_last_day: 8
    /// max_event_length:
    ///   standard: 182
    ///   tuberculosis: 240
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.policy().name, "Custom");
    /// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> CalculatorResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> CalculatorResult<Self> {
        let policy: CompensationPolicy =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns the loaded compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the compensation policy.
    pub fn into_policy(self) -> CompensationPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/ee"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.policy().name,
            "Estonian statutory sick-leave compensation"
        );
    }

    #[test]
    fn test_shipped_policy_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &CompensationPolicy::default());
    }

    #[test]
    fn test_default_loader_holds_default_policy() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.into_policy(), CompensationPolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(CalculatorError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("income_replacement_rate: [0.7");

        match result {
            Err(CalculatorError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "<inline>");
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_missing_field_returns_parse_error() {
        let yaml = r#"
name: Incomplete
income_replacement_rate: 0.7
bank_month_days: 30
"#;
        let result = ConfigLoader::from_yaml_str(yaml);

        match result {
            Err(CalculatorError::ConfigParseError { message, .. }) => {
                assert!(message.contains("missing field"), "got: {}", message);
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_invalid_policy_values_are_rejected() {
        let yaml = r#"
name: Broken
income_replacement_rate: 0.7
bank_month_days: 0
net_of_tax_factor: 0.8
waiting_days: 3
employer_last_day: 8
max_event_length:
  standard: 182
  tuberculosis: 240
"#;
        let result = ConfigLoader::from_yaml_str(yaml);

        match result {
            Err(CalculatorError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "bank_month_days");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_custom_policy_values_are_loaded() {
        let yaml = r#"
name: Extended
income_replacement_rate: 0.8
bank_month_days: 31
net_of_tax_factor: 0.78
waiting_days: 1
employer_last_day: 10
max_event_length:
  standard: 200
  tuberculosis: 365
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        let policy = loader.policy();

        assert_eq!(policy.income_replacement_rate, 0.8);
        assert_eq!(policy.bank_month_days, 31);
        assert_eq!(policy.waiting_days, 1);
        assert_eq!(policy.employer_last_day, 10);
        assert_eq!(policy.max_event_length.tuberculosis, 365);
    }
}
