use std::sync::Arc;

use log::debug;
use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use registry_provider::RegistryService;

use crate::{HealthResponse, IntoApiResult, ServerDetail, ServerList};

pub const DEFAULT_LIST_LIMIT: usize = 30;
pub const MAX_LIST_LIMIT: usize = 100;

#[derive(Tags)]
enum ApiTags {
    Health,
    Server,
}

/**
 * Read-only registry API, the registry is taken from the request data
 */
pub struct RegistryApiV0;

#[OpenApi]
impl RegistryApiV0 {
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
        })
    }

    #[oai(path = "/servers", method = "get", tag = "ApiTags::Server")]
    async fn list_servers(
        &self,
        data: Data<&Arc<dyn RegistryService>>,
        cursor: Query<Option<String>>,
        limit: Query<Option<usize>>,
    ) -> poem::Result<Json<ServerList>> {
        let limit = limit
            .0
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT);
        let cursor = cursor.0.filter(|c| !c.is_empty());
        debug!("Listing servers, cursor: {:?}, limit: {}", cursor, limit);
        let (servers, next_cursor) = data
            .0
            .list(cursor.as_deref(), limit)
            .await
            .map_api_error()?;
        Ok(Json(ServerList::new(servers, next_cursor)))
    }

    #[oai(path = "/servers/:id", method = "get", tag = "ApiTags::Server")]
    async fn get_server(
        &self,
        data: Data<&Arc<dyn RegistryService>>,
        id: Path<String>,
    ) -> poem::Result<Json<ServerDetail>> {
        Ok(Json(data.0.get_by_id(&id.0).await.map_api_error()?.into()))
    }
}
