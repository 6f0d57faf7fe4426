//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.size == 0 {
        anyhow::bail!("list size must be at least 1");
    }

    if config.workers == 0 {
        anyhow::bail!("workers must be at least 1");
    }

    if config.runs == 0 {
        anyhow::bail!("runs must be at least 1");
    }

    validate_dataset(&config.dataset)?;

    Ok(())
}

/// Validate input generation settings
pub fn validate_dataset(dataset: &DatasetConfig) -> Result<()> {
    if dataset.min > dataset.max {
        anyhow::bail!(
            "dataset min ({}) must not exceed max ({})",
            dataset.min,
            dataset.max
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::new(10, 4)).is_ok());
    }

    #[test]
    fn test_workers_above_size_is_valid() {
        // clamped at reduction time
        assert!(validate_config(&Config::new(5, 10)).is_ok());
    }

    #[test]
    fn test_zero_size() {
        assert!(validate_config(&Config::new(0, 4)).is_err());
    }

    #[test]
    fn test_zero_workers() {
        assert!(validate_config(&Config::new(10, 0)).is_err());
    }

    #[test]
    fn test_zero_runs() {
        let mut config = Config::new(10, 2);
        config.runs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_inverted_range() {
        let mut config = Config::new(10, 2);
        config.dataset.min = 50;
        config.dataset.max = 10;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }
}
