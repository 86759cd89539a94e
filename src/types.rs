use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Desired state of a single function, built by the caller and consumed
/// once per deploy. Optional fields default to empty and are treated as
/// unset, not as errors.
#[derive(Debug, Clone, Default)]
pub struct DeployFunctionSpec {
    /// fprocess is the process invoked inside the function's container
    pub fprocess: String,

    /// function_name is unique within a namespace
    pub function_name: String,

    /// image is a fully-qualified container image
    pub image: String,

    /// registry_auth is an opaque credential blob for the image registry
    pub registry_auth: String,

    /// language is the template identifier, informational only
    pub language: String,

    /// replace removes an existing function of the same name before
    /// (re)creation; takes precedence over `update`
    pub replace: bool,

    /// env_vars for the function runtime
    pub env_vars: Option<HashMap<String, String>>,

    /// network is the overlay network identifier
    pub network: String,

    /// constraints are placement constraints, specific to the faas-provider
    pub constraints: Vec<String>,

    /// update attempts an in-place update before falling back to create
    pub update: bool,

    /// secrets list of secrets to be made available to the function
    pub secrets: Vec<String>,

    /// labels are metadata which may be used by the faas-provider or the
    /// gateway
    pub labels: HashMap<String, String>,

    /// annotations are metadata which may be used by the faas-provider or
    /// the gateway
    pub annotations: HashMap<String, String>,

    /// function_resource_request carries CPU and memory limits/requests,
    /// forwarded opaquely to the gateway
    pub function_resource_request: FunctionResourceRequest,

    /// read_only_root_filesystem removes write-access from the root
    /// filesystem mount-point
    pub read_only_root_filesystem: bool,

    /// tls_insecure skips certificate verification on the transport
    pub tls_insecure: bool,

    /// token is an optional bearer credential forwarded with the request
    pub token: String,

    /// namespace for the function; empty means the default namespace
    pub namespace: String,
}

impl DeployFunctionSpec {
    /// Gateway-addressable identifier, recomputed per operation.
    pub fn qualified_name(&self) -> String {
        qualified_function_name(&self.function_name, &self.namespace)
    }
}

/// Returns `function_name` when `namespace` is empty, otherwise
/// `function_name.namespace`.
pub fn qualified_function_name(function_name: &str, namespace: &str) -> String {
    if namespace.is_empty() {
        function_name.to_string()
    } else {
        format!("{}.{}", function_name, namespace)
    }
}

/// Limits and requests of resources for a function
#[derive(Debug, Clone, Default)]
pub struct FunctionResourceRequest {
    pub limits: Option<FunctionResources>,
    pub requests: Option<FunctionResources>,
}

/// FunctionResources Memory and CPU
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FunctionResources {
    /// memory is the memory limit for the function
    pub memory: Option<String>,
    /// cpu is the cpu limit for the function
    pub cpu: Option<String>,
}

/// Wire body for create and update calls against the functions endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeployment {
    /// service is the name of the function deployment
    pub service: String,

    /// image is a fully-qualified container image
    pub image: String,

    /// namespace for the function, if supported by the faas-provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// envProcess overrides the fprocess environment variable and can be
    /// used with the watchdog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_process: Option<String>,

    /// network is specific to faas-providers that support overlay networks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// envVars can be provided to set environment variables for the
    /// function runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<HashMap<String, String>>,

    /// registryAuth is the registry authentication, base64-encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_auth: Option<String>,

    /// constraints are specific to the faas-provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,

    /// secrets list of secrets to be made available to function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<String>>,

    /// labels are metadata for functions which may be used by the
    /// faas-provider or the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,

    /// annotations are metadata for functions which may be used by the
    /// faas-provider or the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,

    /// limits for function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<FunctionResources>,

    /// requests of resources requested by function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<FunctionResources>,

    /// readOnlyRootFilesystem removes write-access from the root
    /// filesystem mount-point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_root_filesystem: Option<bool>,
}

impl From<&DeployFunctionSpec> for FunctionDeployment {
    fn from(spec: &DeployFunctionSpec) -> Self {
        Self {
            service: spec.function_name.clone(),
            image: spec.image.clone(),
            namespace: none_if_empty(&spec.namespace),
            env_process: none_if_empty(&spec.fprocess),
            network: none_if_empty(&spec.network),
            env_vars: spec.env_vars.clone(),
            registry_auth: none_if_empty(&spec.registry_auth),
            constraints: none_if_empty_vec(&spec.constraints),
            secrets: none_if_empty_vec(&spec.secrets),
            labels: none_if_empty_map(&spec.labels),
            annotations: none_if_empty_map(&spec.annotations),
            limits: spec.function_resource_request.limits.clone(),
            requests: spec.function_resource_request.requests.clone(),
            read_only_root_filesystem: spec.read_only_root_filesystem.then_some(true),
        }
    }
}

/// Wire body for delete calls against the functions endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFunctionRequest {
    /// Name of deployed function
    pub function_name: String,
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn none_if_empty_vec(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn none_if_empty_map(map: &HashMap<String, String>) -> Option<HashMap<String, String>> {
    if map.is_empty() {
        None
    } else {
        Some(map.clone())
    }
}
