use std::time::Duration;

pub const FUNCTIONS_ENDPOINT: &str = "/system/functions";

pub const GATEWAY_URL_ENV_VAR: &str = "OPENFAAS_GATEWAY_URL";
pub const GATEWAY_DEFAULT_URL: &str = "http://gateway.openfaas:8080";

/// Upper bound for a single gateway command if the caller does not
/// cancel earlier.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);
