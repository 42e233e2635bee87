//! Unit tests for the vitals-recorder lib module

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        let expected = RecorderConfig::default();

        assert_eq!(config.enabled, expected.enabled);
        assert_eq!(config.response_time_window, expected.response_time_window);
        assert_eq!(config.probe_resources, expected.probe_resources);
    }

    #[test]
    fn test_default_config_consistency() {
        let first = default_config();
        let second = default_config();

        assert_eq!(first.enabled, second.enabled);
        assert_eq!(first.response_time_window, second.response_time_window);
    }
}
