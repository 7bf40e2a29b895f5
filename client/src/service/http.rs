//! REST implementation of [`ItemService`]

use super::{ItemService, ServiceError, ServiceOperation};
use crate::config::ClientConfig;
use crate::item::{Item, ItemId, NewItem};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::future::Future;

const JSON: &str = "application/json";

/// Item service backed by the REST collection at `api_url`
///
/// | Operation      | Request                      |
/// |----------------|------------------------------|
/// | `create`       | `POST {base}` with the item  |
/// | `get_all`      | `GET {base}`                 |
/// | `update`       | `PUT {base}{id}` with item   |
/// | `delete_by_id` | `DELETE {base}{id}`          |
///
/// Any non-2xx answer is an error. No timeout or retry is applied.
#[derive(Clone, Debug)]
pub struct HttpItemService {
    client: Client,
    base_url: Url,
}

impl HttpItemService {
    /// Create a service with a fresh HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if `config.api_url` is not an
    /// absolute http(s) URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        Self::with_client(Client::new(), config)
    }

    /// Create a service sharing an existing HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if `config.api_url` is not an
    /// absolute http(s) URL.
    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, ServiceError> {
        let invalid = |reason: String| ServiceError::InvalidUrl {
            url: config.api_url.clone(),
            reason,
        };

        let base_url = Url::parse(&config.api_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base_url.scheme())));
        }

        Ok(Self { client, base_url })
    }

    /// Base URL of the item collection
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn item_url(&self, id: ItemId) -> Result<Url, ServiceError> {
        self.base_url
            .join(&id.to_string())
            .map_err(|e| ServiceError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Turn a non-2xx response into [`ServiceError::Status`]
async fn check_status(operation: ServiceOperation, response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        operation,
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(operation: ServiceOperation, response: Response) -> Result<T, ServiceError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode {
            operation,
            message: e.to_string(),
        })
}

fn request_failed(operation: ServiceOperation) -> impl FnOnce(reqwest::Error) -> ServiceError {
    move |e| ServiceError::Request {
        operation,
        message: e.to_string(),
    }
}

impl ItemService for HttpItemService {
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ServiceError>> + Send {
        let operation = ServiceOperation::Create;
        let client = self.client.clone();
        let url = self.base_url.clone();

        async move {
            tracing::debug!(%url, "POST new item");
            let response = client
                .post(url)
                .header(ACCEPT, JSON)
                .json(&item)
                .send()
                .await
                .map_err(request_failed(operation))?;
            let response = check_status(operation, response).await?;
            decode(operation, response).await
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ServiceError>> + Send {
        let operation = ServiceOperation::GetAll;
        let client = self.client.clone();
        let url = self.base_url.clone();

        async move {
            tracing::debug!(%url, "GET all items");
            let response = client.get(url).send().await.map_err(request_failed(operation))?;
            let response = check_status(operation, response).await?;
            decode(operation, response).await
        }
    }

    fn update(&self, item: Item) -> impl Future<Output = Result<Item, ServiceError>> + Send {
        let operation = ServiceOperation::Update;
        let client = self.client.clone();
        let url = self.item_url(item.id);

        async move {
            let url = url?;
            tracing::debug!(%url, "PUT item");
            let response = client
                .put(url)
                .header(ACCEPT, JSON)
                .json(&item)
                .send()
                .await
                .map_err(request_failed(operation))?;
            let response = check_status(operation, response).await?;
            decode(operation, response).await
        }
    }

    fn delete_by_id(&self, id: ItemId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        let operation = ServiceOperation::Delete;
        let client = self.client.clone();
        let url = self.item_url(id);

        async move {
            let url = url?;
            tracing::debug!(%url, "DELETE item");
            let response = client
                .delete(url)
                .header(CONTENT_TYPE, JSON)
                .header(ACCEPT, JSON)
                .body("")
                .send()
                .await
                .map_err(request_failed(operation))?;
            check_status(operation, response).await?;
            Ok(())
        }
    }
}
