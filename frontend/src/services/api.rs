use async_trait::async_trait;
use crm_store::{ApiConfig, Gateway, GatewayError};
use gloo::net::http::{Request, Response};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::Entity;

/// Gateway to the CRM REST API over the browser's fetch
#[derive(Clone, Debug, PartialEq)]
pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, GatewayError> {
        let url = self.config.collection_url::<E>();
        debug!("GET {}", url);

        let result = async {
            let response = Request::get(&url).send().await.map_err(network_error)?;
            read_json(response).await
        }
        .await;

        logged(result, "fetching", E::RESOURCE)
    }

    async fn get<E: Entity>(&self, id: &str) -> Result<E, GatewayError> {
        let url = self.config.item_url::<E>(id);
        debug!("GET {}", url);

        let result = async {
            let response = Request::get(&url).send().await.map_err(network_error)?;
            read_json(response).await
        }
        .await;

        logged(result, "fetching", E::NAME)
    }

    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<E, GatewayError> {
        let url = self.config.collection_url::<E>();
        debug!("POST {}", url);

        let result = async {
            let response = Request::post(&url)
                .json(draft)
                .map_err(encode_error)?
                .send()
                .await
                .map_err(network_error)?;
            read_json(response).await
        }
        .await;

        logged(result, "creating", E::NAME)
    }

    async fn update<E: Entity>(&self, id: &str, draft: &E::Draft) -> Result<Value, GatewayError> {
        let url = self.config.item_url::<E>(id);
        debug!("PUT {}", url);

        let result = async {
            let response = Request::put(&url)
                .json(draft)
                .map_err(encode_error)?
                .send()
                .await
                .map_err(network_error)?;
            read_body(response).await
        }
        .await;

        logged(result, "updating", E::NAME)
    }

    async fn delete<E: Entity>(&self, id: &str) -> Result<Value, GatewayError> {
        let url = self.config.item_url::<E>(id);
        debug!("DELETE {}", url);

        let result = async {
            let response = Request::delete(&url).send().await.map_err(network_error)?;
            read_body(response).await
        }
        .await;

        logged(result, "deleting", E::NAME)
    }
}

fn network_error(e: gloo::net::Error) -> GatewayError {
    GatewayError::Network(e.to_string())
}

fn encode_error(e: gloo::net::Error) -> GatewayError {
    GatewayError::Encode(e.to_string())
}

fn logged<T>(result: Result<T, GatewayError>, action: &str, subject: &str) -> Result<T, GatewayError> {
    if let Err(e) = &result {
        error!("Error {} {}: {}", action, subject, e);
    }
    result
}

async fn check_status(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(GatewayError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Body of a mutation response. Empty bodies become `null` and non-JSON
/// bodies are kept as a string; callers never depend on the shape.
async fn read_body(response: Response) -> Result<Value, GatewayError> {
    let response = check_status(response).await?;
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}
