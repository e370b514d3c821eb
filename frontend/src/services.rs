// API service layer for communicating with backend
use gloo_net::http::{Request, RequestBuilder, Response};
use roster_shared::{ApiError, ApiResult, Resource};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::config::config;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    fn url(endpoint: &str) -> String {
        format!("{}{}", config().api_base_url, endpoint)
    }

    async fn send(method: &'static str, endpoint: &str, req: RequestBuilder) -> ApiResult<Response> {
        debug!(method, endpoint, "request");
        Self::check(method, endpoint, req.send().await)
    }

    async fn send_with_body<B: Serialize>(
        method: &'static str,
        endpoint: &str,
        req: RequestBuilder,
        body: &B,
    ) -> ApiResult<Response> {
        let req = req.json(body).map_err(|e| {
            let err = ApiError::Encode(e.to_string());
            error!(method, endpoint, code = err.code(), "{err}");
            err
        })?;

        debug!(method, endpoint, "request");
        Self::check(method, endpoint, req.send().await)
    }

    fn check(
        method: &'static str,
        endpoint: &str,
        sent: Result<Response, gloo_net::Error>,
    ) -> ApiResult<Response> {
        let response = sent.map_err(|e| {
            let err = ApiError::Network(e.to_string());
            error!(method, endpoint, code = err.code(), "{err}");
            err
        })?;

        if response.ok() {
            Ok(response)
        } else {
            let err = ApiError::Status(response.status());
            error!(method, endpoint, code = err.code(), "{err}");
            Err(err)
        }
    }

    async fn parse<T: DeserializeOwned>(endpoint: &str, response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            error!(endpoint, code = err.code(), "{err}");
            err
        })
    }

    // GET request
    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let response = Self::send("GET", endpoint, Request::get(&Self::url(endpoint))).await?;
        Self::parse(endpoint, response).await
    }

    // POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let req = Request::post(&Self::url(endpoint));
        let response = Self::send_with_body("POST", endpoint, req, body).await?;
        Self::parse(endpoint, response).await
    }

    // PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        let req = Request::put(&Self::url(endpoint));
        let response = Self::send_with_body("PUT", endpoint, req, body).await?;
        Self::parse(endpoint, response).await
    }

    // DELETE request; the backend answers with no content
    pub async fn delete(endpoint: &str) -> ApiResult<()> {
        Self::send("DELETE", endpoint, Request::delete(&Self::url(endpoint))).await?;
        Ok(())
    }
}

// ============================================
// RESOURCE OPERATIONS
// ============================================

pub async fn list<R: Resource>(filter: &R::Filter) -> ApiResult<Vec<R::Entity>> {
    ApiClient::get(&R::list_path(filter)).await
}

pub async fn create<R: Resource>(payload: &R::Payload) -> ApiResult<R::Entity> {
    ApiClient::post(&R::KIND.collection_path(), payload).await
}

pub async fn update<R: Resource>(id: i64, patch: &R::Patch) -> ApiResult<R::Entity> {
    ApiClient::put(&R::item_path(id), patch).await
}

pub async fn delete<R: Resource>(id: i64) -> ApiResult<()> {
    ApiClient::delete(&R::item_path(id)).await
}

/// `(id, label)` pairs for a selection control over `R`.
pub async fn reference_options<R: Resource>() -> ApiResult<Vec<(i64, String)>> {
    Ok(list::<R>(&R::Filter::default())
        .await?
        .iter()
        .map(|entity| (R::id(entity), R::label(entity)))
        .collect())
}

// ============================================
// ORGANIZATIONS SERVICE
// ============================================

pub mod organizations {
    use super::*;
    use roster_shared::{NewOrganization, Organization, OrganizationPatch, Organizations};

    #[allow(dead_code)]
    pub async fn list() -> ApiResult<Vec<Organization>> {
        super::list::<Organizations>(&()).await
    }

    #[allow(dead_code)]
    pub async fn create(req: &NewOrganization) -> ApiResult<Organization> {
        super::create::<Organizations>(req).await
    }

    pub async fn update(id: i64, req: &OrganizationPatch) -> ApiResult<Organization> {
        super::update::<Organizations>(id, req).await
    }

    #[allow(dead_code)]
    pub async fn delete(id: i64) -> ApiResult<()> {
        super::delete::<Organizations>(id).await
    }
}

// ============================================
// CONTACTS SERVICE
// ============================================

pub mod contacts {
    use super::*;
    use roster_shared::{Contact, ContactFilter, ContactPatch, Contacts, NewContact};

    /// Filters are sent only when present.
    #[allow(dead_code)]
    pub async fn list(search: Option<&str>, organization_id: Option<i64>) -> ApiResult<Vec<Contact>> {
        super::list::<Contacts>(&ContactFilter::new(search, organization_id)).await
    }

    pub async fn create(req: &NewContact) -> ApiResult<Contact> {
        super::create::<Contacts>(req).await
    }

    #[allow(dead_code)]
    pub async fn update(id: i64, req: &ContactPatch) -> ApiResult<Contact> {
        super::update::<Contacts>(id, req).await
    }

    #[allow(dead_code)]
    pub async fn delete(id: i64) -> ApiResult<()> {
        super::delete::<Contacts>(id).await
    }
}
