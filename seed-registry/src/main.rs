use std::{sync::Arc, time::Duration};

use clap::Parser;
use common_utils::{Blank, Logged};
use log::{info, warn};
use memory_provider::MemoryRegistry;
use poem::{
    listener::TcpListener,
    middleware::{Cors, Tracing},
    EndpointExt, IntoEndpoint, Route, Server,
};
use poem_openapi::OpenApiService;
use registry_api::{RegistryApiV0, SeedEndpoint};
use registry_provider::{RegistryService, SeedReader, DEFAULT_SEED_PATH};

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Opt {
    /// Server Listening Address
    #[clap(long, env = "SERVER_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: String,

    /// Base Path of the API
    #[clap(long, env = "API_BASE", default_value = "/v0")]
    pub api_base: String,

    /// Seed document to import, a local path or a HTTP(S) URL, `data/seed.json` if not set
    #[clap(long, env = "SEED_FILE")]
    pub seed_file: Option<String>,

    /// True to import the seed document at start-up
    #[clap(long, env = "LOAD_SEED")]
    pub load_seed: bool,

    /// Timeout in seconds of fetching a remote seed document
    #[clap(long, env = "SEED_FETCH_TIMEOUT", default_value = "30")]
    pub fetch_timeout: u64,
}

impl Opt {
    fn seed_path(&self) -> String {
        if self.seed_file.is_blank() {
            String::new()
        } else {
            self.seed_file.clone().unwrap_or_default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    common_utils::init_logger();

    // Parse the parameters passed by arguments.
    let options = Opt::parse();

    let registry = Arc::new(MemoryRegistry::new());
    if options.load_seed {
        let reader = SeedReader::new(DEFAULT_SEED_PATH, Duration::from_secs(options.fetch_timeout));
        let summary = reader
            .import(registry.as_ref(), &options.seed_path())
            .await
            .log()?;
        if summary.failed > 0 {
            warn!(
                "{} of {} seed entries were not imported",
                summary.failed, summary.total
            );
        }
    }
    info!("Registry contains {} servers", registry.len().await);
    let registry: Arc<dyn RegistryService> = registry;

    let api_base = format!("/{}", options.api_base.trim_matches('/'));
    let http_addr = options
        .http_addr
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .to_string();

    let api_service = OpenApiService::new(
        RegistryApiV0,
        "Server Registry API",
        option_env!("CARGO_PKG_VERSION").unwrap_or("<unknown>"),
    )
    .server(&format!("http://{}{}", http_addr, api_base));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec();

    // The seed endpoint sets its own CORS headers
    let api_route = Route::new()
        .at("/seed.json", SeedEndpoint::new(registry.clone()))
        .nest("/", api_service.into_endpoint().with(Cors::new()))
        .with(Tracing);

    let route = Route::new()
        .nest("docs", ui)
        .at("spec", poem::endpoint::make_sync(move |_| spec.clone()))
        .nest(api_base, api_route)
        .data(registry);

    info!("Listening on {}", http_addr);
    Server::new(TcpListener::bind(http_addr))
        .run(route)
        .await
        .log()
        .map_err(anyhow::Error::from)
}
