//! Configuration access port trait.

use crate::domain::error::StockChartError;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    /// `Ok(None)` when the key is absent, `ConfigInvalid` when it is not an integer.
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, StockChartError>;

    /// Non-empty string value or `ConfigMissing`.
    fn require_string(&self, section: &str, key: &str) -> Result<String, StockChartError> {
        self.get_string(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| StockChartError::ConfigMissing {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}
