pub mod brewery;
pub mod user;

use crate::core::envelope::{self, ListShape, SingleShape};
use crate::core::export::Export;
use crate::core::pagination::Query;
use crate::domain::ports::{Method, RawResponse, ResponseMeta, Transport};
use crate::utils::error::{Result, UntappdError};
use serde::de::DeserializeOwned;

pub use brewery::BreweryService;
pub use user::UserService;

/// Exported data together with the metadata of the response it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

async fn fetch<T: Transport + ?Sized>(transport: &T, path: &str, query: &Query) -> Result<RawResponse> {
    tracing::debug!("{} {} ({} query parameters)", Method::Get.as_str(), path, query.len());
    let response = transport.perform(Method::Get, path, query).await?;
    tracing::debug!("Response status {} for {}", response.meta.status, path);

    if !response.meta.is_success() {
        let detail = envelope::decode_error_detail(&response.body);
        return Err(UntappdError::Api {
            meta: response.meta,
            detail,
        });
    }
    Ok(response)
}

pub(crate) async fn fetch_single<T, R>(
    transport: &T,
    path: &str,
    query: &Query,
    shape: SingleShape,
) -> Result<ApiResponse<R::Output>>
where
    T: Transport + ?Sized,
    R: DeserializeOwned + Export,
{
    let RawResponse { meta, body } = fetch(transport, path, query).await?;
    match envelope::decode_single::<R>(&body, shape) {
        Ok(raw) => Ok(ApiResponse {
            data: raw.export(),
            meta,
        }),
        Err(source) => Err(UntappdError::Decode {
            source,
            meta: Some(meta),
        }),
    }
}

pub(crate) async fn fetch_list<T, R>(
    transport: &T,
    path: &str,
    query: &Query,
    shape: &ListShape,
) -> Result<ApiResponse<Vec<R::Output>>>
where
    T: Transport + ?Sized,
    R: DeserializeOwned + Export,
{
    let RawResponse { meta, body } = fetch(transport, path, query).await?;
    match envelope::decode_list::<R>(&body, shape) {
        Ok(list) => Ok(ApiResponse {
            data: list.export(),
            meta,
        }),
        Err(source) => Err(UntappdError::Decode {
            source,
            meta: Some(meta),
        }),
    }
}
