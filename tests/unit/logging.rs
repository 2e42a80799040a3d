//! Unit tests for log format selection

use tradekit::logging::LogFormat;

#[test]
fn test_production_logs_json() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("prod"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment(" PROD "), LogFormat::Json);
}

#[test]
fn test_other_environments_log_pretty() {
    for env in ["development", "sandbox", "staging", ""] {
        assert_eq!(LogFormat::for_environment(env), LogFormat::Pretty);
    }
}
