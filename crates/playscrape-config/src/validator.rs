//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// The first error as a [`ConfigError`], if any.
    pub fn first_error(&self) -> Option<ConfigError> {
        self.errors.first().map(|e| ConfigError::InvalidValue {
            field: e.path.clone(),
            message: e.message.clone(),
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_scrape(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.request_timeout_ms == 0 {
            result.add_error(ValidationError::new(
                "server.request_timeout_ms",
                "request_timeout_ms must be greater than 0",
            ));
        } else if config.server.request_timeout_ms < config.scrape.max_load_ms {
            result.add_warning(ValidationWarning::new(
                "server.request_timeout_ms",
                "request timeout is shorter than scrape.max_load_ms; long playlists will be cut off by the request deadline",
            ));
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        if config.browser.debug_port == 0 {
            result.add_error(ValidationError::new("browser.debug_port", "Port cannot be 0"));
        }

        if config.browser.max_pages == 0 {
            result.add_error(ValidationError::new(
                "browser.max_pages",
                "max_pages must be greater than 0",
            ));
        }

        if config.browser.viewport_width == 0 || config.browser.viewport_height == 0 {
            result.add_error(ValidationError::new(
                "browser.viewport",
                "viewport dimensions must be greater than 0",
            ));
        }

        if let Some(path) = &config.browser.chrome_path {
            if !path.exists() {
                result.add_warning(ValidationWarning::new(
                    "browser.chrome_path",
                    format!("Chrome executable does not exist: {:?}", path),
                ));
            }
        }
    }

    fn validate_scrape(config: &Config, result: &mut ValidationResult) {
        let scrape = &config.scrape;

        for (path, selector) in scrape.selectors() {
            if selector.trim().is_empty() {
                result.add_error(ValidationError::new(path, "Selector cannot be empty"));
            }
        }

        if scrape.scroll_settle_ms == 0 {
            result.add_error(ValidationError::new(
                "scrape.scroll_settle_ms",
                "scroll_settle_ms must be greater than 0",
            ));
        }

        if scrape.max_scroll_iterations == 0 {
            result.add_error(ValidationError::new(
                "scrape.max_scroll_iterations",
                "max_scroll_iterations must be greater than 0",
            ));
        }

        if scrape.max_load_ms == 0 {
            result.add_error(ValidationError::new(
                "scrape.max_load_ms",
                "max_load_ms must be greater than 0",
            ));
        } else if scrape.scroll_settle_ms > scrape.max_load_ms {
            result.add_warning(ValidationWarning::new(
                "scrape.scroll_settle_ms",
                "settle interval is longer than max_load_ms; loading will stop after the first scroll",
            ));
        }

        if scrape.initial_selector_timeout_ms == 0 {
            result.add_warning(ValidationWarning::new(
                "scrape.initial_selector_timeout_ms",
                "initial selector timeout is 0; the list must already be rendered when the page loads",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
