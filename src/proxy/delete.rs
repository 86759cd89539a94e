use super::client::{ProxyClient, ProxyError};
use crate::{
    consts::FUNCTIONS_ENDPOINT,
    types::{qualified_function_name, DeleteFunctionRequest},
};
use reqwest::{Method, StatusCode};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum DeleteFunctionError {
    #[error("No existing function to remove: {0}")]
    NotFound(String),
    #[error("Server returned unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error(transparent)]
    Proxy(#[from] ProxyError),
}

impl ProxyClient {
    /// Removes a deployed function. Exactly one delete call is issued;
    /// a 404 from the gateway means there was nothing to remove.
    pub async fn delete_function(
        &self,
        function_name: &str,
        namespace: &str,
    ) -> Result<(), DeleteFunctionError> {
        let func_str = qualified_function_name(function_name, namespace);
        let body = serde_json::to_string(&DeleteFunctionRequest {
            function_name: func_str.clone(),
        })
        .map_err(ProxyError::Serializing)?;

        tracing::info!(%func_str, "Deleting function.");

        let resp = self
            .send(Method::DELETE, FUNCTIONS_ENDPOINT, Some(body), None)
            .await?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(DeleteFunctionError::NotFound(func_str)),
            status => Err(DeleteFunctionError::UnexpectedStatus(status.as_u16())),
        }
    }
}
