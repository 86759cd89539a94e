use super::client::{ProxyClient, ProxyError};
use crate::{
    consts::FUNCTIONS_ENDPOINT,
    types::{DeleteFunctionRequest, DeployFunctionSpec, FunctionDeployment},
};
use reqwest::{Method, StatusCode};

/// Terminal result of a deploy: the status of the last gateway call and a
/// message the caller can print or log directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub status: StatusCode,
    pub message: String,
}

/// Call sequence selected from the `replace` and `update` flags.
/// `replace` takes precedence when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeployPlan {
    /// Delete any existing function, then create. The delete call's
    /// status is not fatal: the function may not have existed.
    RemoveThenCreate,
    /// Update in place; create only if the update hits a 404.
    UpdateThenCreate,
    /// Single create call.
    CreateOnly,
}

impl DeployPlan {
    fn from_flags(replace: bool, update: bool) -> Self {
        if replace {
            DeployPlan::RemoveThenCreate
        } else if update {
            DeployPlan::UpdateThenCreate
        } else {
            DeployPlan::CreateOnly
        }
    }
}

/// A 404 on the update call means the function does not exist yet and a
/// create should be attempted instead. Any other status is terminal.
fn update_falls_back_to_create(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

fn render_outcome(status: StatusCode, func_str: &str) -> DeployOutcome {
    let message = if status.is_success() {
        format!("Deployed {}.", func_str)
    } else {
        format!("Unexpected status: {}", status.as_u16())
    };

    DeployOutcome { status, message }
}

impl ProxyClient {
    /// Deploys a function according to `spec`, issuing one or two gateway
    /// calls. Only the last call's status decides the outcome. A
    /// transport or authentication failure is returned as an error, never
    /// folded into the outcome.
    pub async fn deploy_function(
        &self,
        spec: &DeployFunctionSpec,
    ) -> Result<DeployOutcome, ProxyError> {
        let func_str = spec.qualified_name();
        let body = serde_json::to_string(&FunctionDeployment::from(spec))?;
        let token = (!spec.token.is_empty()).then_some(spec.token.as_str());

        if spec.replace && spec.update {
            tracing::warn!(%func_str, "Both replace and update requested. Replacing.");
        }

        let last_status = match DeployPlan::from_flags(spec.replace, spec.update) {
            DeployPlan::RemoveThenCreate => {
                let delete_body = serde_json::to_string(&DeleteFunctionRequest {
                    function_name: func_str.clone(),
                })?;

                let delete_status = self
                    .send(Method::DELETE, FUNCTIONS_ENDPOINT, Some(delete_body), token)
                    .await?
                    .status();

                tracing::info!(%func_str, %delete_status, "Removed existing function before create.");

                self.send(Method::POST, FUNCTIONS_ENDPOINT, Some(body), token)
                    .await?
                    .status()
            }
            DeployPlan::UpdateThenCreate => {
                let update_status = self
                    .send(Method::PUT, FUNCTIONS_ENDPOINT, Some(body.clone()), token)
                    .await?
                    .status();

                if update_falls_back_to_create(update_status) {
                    tracing::info!(%func_str, "Function does not exist yet. Creating.");

                    self.send(Method::POST, FUNCTIONS_ENDPOINT, Some(body), token)
                        .await?
                        .status()
                } else {
                    update_status
                }
            }
            DeployPlan::CreateOnly => self
                .send(Method::POST, FUNCTIONS_ENDPOINT, Some(body), token)
                .await?
                .status(),
        };

        Ok(render_outcome(last_status, &func_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_takes_precedence_over_update() {
        assert_eq!(
            DeployPlan::from_flags(true, true),
            DeployPlan::RemoveThenCreate
        );
        assert_eq!(
            DeployPlan::from_flags(true, false),
            DeployPlan::RemoveThenCreate
        );
    }

    #[test]
    fn update_flag_selects_update_plan() {
        assert_eq!(
            DeployPlan::from_flags(false, true),
            DeployPlan::UpdateThenCreate
        );
    }

    #[test]
    fn no_flags_select_create_only() {
        assert_eq!(DeployPlan::from_flags(false, false), DeployPlan::CreateOnly);
    }

    #[test]
    fn only_not_found_triggers_the_fallback_create() {
        assert!(update_falls_back_to_create(StatusCode::NOT_FOUND));
        assert!(!update_falls_back_to_create(StatusCode::OK));
        assert!(!update_falls_back_to_create(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!update_falls_back_to_create(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn success_renders_a_deployed_message() {
        let outcome = render_outcome(StatusCode::OK, "funcName.nameSpace");

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.message, "Deployed funcName.nameSpace.");
    }

    #[test]
    fn accepted_counts_as_success() {
        let outcome = render_outcome(StatusCode::ACCEPTED, "funcName");

        assert_eq!(outcome.status, StatusCode::ACCEPTED);
        assert_eq!(outcome.message, "Deployed funcName.");
    }

    #[test]
    fn other_statuses_render_the_code_verbatim() {
        let outcome = render_outcome(StatusCode::NOT_FOUND, "funcName");

        assert_eq!(outcome.status, StatusCode::NOT_FOUND);
        assert_eq!(outcome.message, "Unexpected status: 404");
    }
}
