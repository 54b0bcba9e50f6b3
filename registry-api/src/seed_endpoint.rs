use std::sync::Arc;

use log::{debug, error, info};
use poem::{
    error::ResponseError,
    http::{header, Method, StatusCode},
    Endpoint, Request, Response, Result,
};
use registry_provider::RegistryService;

use crate::{SeedExportError, SeedExporter};

/**
 * Serves the whole registry as a seed document, only `GET` is accepted.
 * The document is public, any origin may fetch it.
 */
pub struct SeedEndpoint {
    exporter: SeedExporter,
}

impl SeedEndpoint {
    pub fn new(registry: Arc<dyn RegistryService>) -> Self {
        Self {
            exporter: SeedExporter::new(registry),
        }
    }

    pub fn with_exporter(exporter: SeedExporter) -> Self {
        Self { exporter }
    }

    fn error_response(&self, e: SeedExportError) -> Response {
        let builder = Response::builder()
            .status(e.status())
            .content_type("text/plain; charset=utf-8");
        match e {
            SeedExportError::MethodNotAllowed(method) => {
                debug!("Rejected {} request for seed data", method);
                builder
                    .header(header::ALLOW, Method::GET.as_str())
                    .body("Method not allowed")
            }
            e => {
                error!("Error exporting seed data: {}", e);
                builder.body("Internal server error")
            }
        }
    }
}

#[async_trait::async_trait]
impl Endpoint for SeedEndpoint {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if req.method() != Method::GET {
            return Ok(self.error_response(SeedExportError::MethodNotAllowed(
                req.method().clone(),
            )));
        }

        Ok(match self.exporter.export().await {
            Ok(body) => {
                info!("Exported seed data, {} bytes", body.len());
                Response::builder()
                    .status(StatusCode::OK)
                    .content_type("application/json")
                    .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                    .header(header::ACCESS_CONTROL_ALLOW_METHODS, Method::GET.as_str())
                    .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
                    .body(body)
            }
            Err(e) => self.error_response(e),
        })
    }
}
