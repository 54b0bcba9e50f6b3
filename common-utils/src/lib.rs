use std::fmt::Debug;

use log::trace;

/// Log if `Result` is an error
pub trait Logged {
    fn log(self) -> Self;
}

impl<T, E> Logged for Result<T, E>
where
    E: Debug,
{
    fn log(self) -> Self {
        if let Err(e) = &self {
            trace!("---TraceError--- {:#?}", e)
        }
        self
    }
}

pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for Option<String> {
    fn is_blank(&self) -> bool {
        match &self {
            Some(s) => s.trim().is_empty(),
            None => true,
        }
    }
}

static LOGGER: std::sync::Once = std::sync::Once::new();

pub fn init_logger() {
    LOGGER.call_once(|| {
        dotenv::dotenv().ok();
        let modules = [
            "common_utils",
            "registry_provider",
            "memory_provider",
            "registry_api",
            "seed_registry",
        ];
        let module_logs = modules
            .into_iter()
            .map(|m| format!("{}=debug", m))
            .collect::<Vec<_>>()
            .join(",");
        let rust_log = format!("info,hyper=warn,reqwest=warn,{}", module_logs);
        if std::env::var_os("RUST_LOG").is_none() {
            std::env::set_var("RUST_LOG", &rust_log);
        }
        tracing_subscriber::fmt::init();
    });
}
