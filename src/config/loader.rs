//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ForgeConfig;
use crate::domain::errors::ForgeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ForgeConfig
/// 4. Applies environment variable overrides (ICONFORGE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use iconforge::config::loader::load_config;
///
/// let config = load_config("iconforge.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ForgeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ForgeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ForgeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ForgeConfig = toml::from_str(&contents)
        .map_err(|e| ForgeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ForgeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ForgeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the ICONFORGE_* prefix
///
/// Environment variables follow the pattern: ICONFORGE_<SECTION>_<KEY>
/// For example: ICONFORGE_EXPORT_OUTPUT_DIR, ICONFORGE_LOGGING_LEVEL
fn apply_env_overrides(config: &mut ForgeConfig) {
    // Export overrides
    if let Ok(val) = std::env::var("ICONFORGE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val.into();
    }
    if let Ok(val) = std::env::var("ICONFORGE_EXPORT_DEFAULT_COLOR") {
        config.export.default_color = val;
    }
    if let Ok(val) = std::env::var("ICONFORGE_EXPORT_PARALLEL_ICONS") {
        if let Ok(parallel) = val.parse() {
            config.export.parallel_icons = parallel;
        }
    }
    if let Ok(val) = std::env::var("ICONFORGE_EXPORT_WRITE_SUMMARY") {
        config.export.write_summary = val.parse().unwrap_or(false);
    }

    // Naming overrides
    if let Ok(val) = std::env::var("ICONFORGE_NAMING_PATTERN") {
        config.naming.pattern = val;
    }
    if let Ok(val) = std::env::var("ICONFORGE_NAMING_SANITIZE") {
        config.naming.sanitize = val.parse().unwrap_or(true);
    }

    // Provider overrides
    if let Ok(val) = std::env::var("ICONFORGE_PROVIDER_COLLECTIONS_DIR") {
        config.provider.collections_dir = val.into();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ICONFORGE_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("ICONFORGE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ICONFORGE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("FORGE_TEST_VAR", "test_value");
        let input = "output_dir = \"${FORGE_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result.trim_end(), "output_dir = \"test_value\"");
        std::env::remove_var("FORGE_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("FORGE_MISSING_VAR");
        let input = "output_dir = \"${FORGE_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("FORGE_COMMENTED_VAR");
        let input = "# output_dir = \"${FORGE_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result.trim_end(), input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[export]
collections = ["mdi"]
output_dir = "./dist"
formats = ["svg", "png"]

[naming]
pattern = "{icon}-{size}"

[provider]
collections_dir = "./json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.export.collections, vec!["mdi".to_string()]);
        assert_eq!(config.naming.pattern, "{icon}-{size}");
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let toml_content = r#"
[export]
collections = []
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
