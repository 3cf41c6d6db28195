use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use matrimony_core::config::{BackendKind, Settings};
use matrimony_core::routes::{self, AppState};
use matrimony_core::services::{
    load_pool_file, Backend, FileStore, MemoryStore, ProfileStore, RedisStore, SwipeSettings,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Redis keys are stored under this prefix
const REDIS_NAMESPACE: &str = "matrimony";

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST);
        HttpResponse::build(status).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

async fn open_backend(settings: &Settings) -> std::io::Result<Backend> {
    let storage = &settings.storage;
    let backend = match storage.backend {
        BackendKind::Memory => Backend::Memory(MemoryStore::new()),
        BackendKind::File => {
            let store = FileStore::open(&storage.data_dir)
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            info!("File store at {}", store.dir().display());
            Backend::File(store)
        }
        BackendKind::Redis => {
            let store = RedisStore::new(&storage.redis_url, storage.l1_cache_size, REDIS_NAMESPACE)
                .await
                .map_err(|e| {
                    error!("Failed to connect to Redis: {}", e);
                    std::io::Error::other("Redis connection required")
                })?;
            info!("Redis store initialized (L1: {} entries)", storage.l1_cache_size);
            Backend::Redis(store)
        }
    };
    Ok(backend)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    init_logging(&settings);
    info!("Starting matrimony session service...");

    let backend = open_backend(&settings).await?;
    info!("Profile store using {} backend", backend.name());

    let store = match &settings.storage.seed_pool_path {
        Some(path) => {
            let pool = load_pool_file(path).await.map_err(|e| {
                error!("Failed to load candidate pool from {}: {}", path.display(), e);
                std::io::Error::other(e.to_string())
            })?;
            ProfileStore::with_seed_pool(backend, pool)
        }
        None => ProfileStore::new(backend),
    };

    let app_state = AppState::new(
        store,
        SwipeSettings {
            screen_width: settings.swipe.screen_width,
            commit_duration_ms: settings.swipe.commit_duration_ms,
        },
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
