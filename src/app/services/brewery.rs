use super::{fetch_list, fetch_single, ApiResponse};
use crate::core::envelope::{ItemShape, ListShape, SingleShape};
use crate::core::pagination::{compact_query, IdWindow};
use crate::domain::brewery::{Brewery, RawBrewery};
use crate::domain::checkin::{Checkin, RawCheckin};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use std::sync::Arc;

const BREWERY_INFO: SingleShape = SingleShape::Nested("brewery");
const BREWERY_CHECKINS: ListShape = ListShape::new("checkins", ItemShape::Bare);

/// Brewery lookups.
pub struct BreweryService<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for BreweryService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> BreweryService<T> {
    pub(crate) fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Information about the brewery with the given ID. With `compact`, the
    /// service leaves out detail fields such as stats and description.
    pub async fn info(&self, id: i64, compact: bool) -> Result<ApiResponse<Brewery>> {
        let path = format!("brewery/info/{}", id);
        fetch_single::<_, RawBrewery>(self.transport.as_ref(), &path, &compact_query(compact), BREWERY_INFO)
            .await
    }

    /// The brewery's 25 most recent checkins.
    pub async fn checkins(&self, id: i64) -> Result<ApiResponse<Vec<Checkin>>> {
        let window = IdWindow::checkins_default();
        self.checkins_min_max_id_limit(id, window.min_id, window.max_id, window.limit)
            .await
    }

    /// Checkins for the brewery within an ID window. No client-side limit is
    /// applied.
    pub async fn checkins_min_max_id_limit(
        &self,
        id: i64,
        min_id: i64,
        max_id: i64,
        limit: u32,
    ) -> Result<ApiResponse<Vec<Checkin>>> {
        let query = IdWindow::new(min_id, max_id, limit).to_query();
        let path = format!("brewery/checkins/{}", id);
        fetch_list::<_, RawCheckin>(self.transport.as_ref(), &path, &query, &BREWERY_CHECKINS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::test_support::RecordingTransport;
    use crate::utils::error::UntappdError;
    use serde_json::json;

    fn service(transport: RecordingTransport) -> (BreweryService<RecordingTransport>, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        (BreweryService::new(Arc::clone(&transport)), transport)
    }

    #[tokio::test]
    async fn test_info_decodes_nested_brewery() {
        let (service, transport) = service(RecordingTransport::json(
            200,
            json!({"meta": {"code": 200}, "response": {"brewery": {
                "brewery_id": 549,
                "brewery_name": "Founders Brewing Co.",
                "brewery_label": "",
                "brewery_active": "1",
                "is_independent": true
            }}}),
        ));

        let response = service.info(549, false).await.unwrap();

        assert_eq!(response.data.id, 549);
        assert_eq!(response.data.name, "Founders Brewing Co.");
        assert!(response.data.active);
        assert!(response.data.independent);
        assert_eq!(response.meta.rate_limit_remaining(), Some(99));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "brewery/info/549");
        assert!(calls[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_info_compact_sets_flag() {
        let (service, transport) = service(RecordingTransport::json(
            200,
            json!({"response": {"brewery": {"brewery_id": 1}}}),
        ));

        service.info(1, true).await.unwrap();

        assert_eq!(transport.calls()[0].1.get("compact"), Some("true"));
    }

    #[tokio::test]
    async fn test_checkins_default_window() {
        let (service, transport) = service(RecordingTransport::json(
            200,
            json!({"response": {"checkins": {"count": 1, "items": [{"checkin_id": 77}]}}}),
        ));

        let response = service.checkins(549).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, 77);
        let (path, query) = &transport.calls()[0];
        assert_eq!(path, "brewery/checkins/549");
        assert_eq!(query.get("min_id"), Some("0"));
        assert_eq!(query.get("max_id"), Some("2147483647"));
        assert_eq!(query.get("limit"), Some("25"));
    }

    #[tokio::test]
    async fn test_invalid_logo_is_decode_error_with_meta() {
        let (service, _transport) = service(RecordingTransport::json(
            200,
            json!({"response": {"brewery": {"brewery_label": "::not-a-url::"}}}),
        ));

        let err = service.info(1, false).await.unwrap_err();

        assert!(matches!(err, UntappdError::Decode { .. }));
        assert_eq!(err.meta().map(|m| m.status), Some(200));
        assert!(err.to_string().contains("::not-a-url::"), "{}", err);
    }
}
