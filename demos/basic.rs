use std::path::{Path, PathBuf};

use econf::config::{validators, Case, Fallback, MapEnv, OptionalityRule, Session};
use econf::{AppContext, FromSession};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug)]
#[allow(dead_code)]
struct AppConfig {
    listen_port: Option<u16>,
    database_url: Option<Url>,
    data_dir: Option<PathBuf>,
    allowed_origins: Option<Vec<String>>,
    region: Option<String>,
}

impl FromSession for AppConfig {
    fn from_session(session: &mut Session) -> Self {
        Self {
            listen_port: session.declare("LISTEN_PORT", validators::port(), Fallback::Literal(3000)),
            database_url: session.declare_interpolated("DATABASE_URL", validators::url(), Fallback::Required, true),
            data_dir: session.declare(
                "DATA_DIR",
                validators::folder_exists(),
                Fallback::Rule(OptionalityRule::LOCAL_DEVELOPMENT),
            ),
            allowed_origins: session.declare(
                "ALLOWED_ORIGINS",
                validators::string_list(',').folded(Case::Lower),
                Fallback::Literal(Vec::new()),
            ),
            region: session.declare(
                "REGION",
                validators::one_of(["eu", "us"], Case::Lower),
                Fallback::Literal("eu".to_string()),
            ),
        }
    }
}

fn main() -> Result<(), econf::Error> {
    // Try with e.g. DEMO_DATABASE_URL='postgres://${USER}@localhost/demo'
    let mut builder = Session::builder().with_prefix("DEMO");
    if Path::new(".env").exists() {
        builder = builder.with_env(MapEnv::from_dotenv(".env")?);
    }
    let session = builder.build();

    let ctx = match AppContext::builder().with_session(session).build::<AppConfig>() {
        Ok(ctx) => ctx,
        Err(econf::Error::Validation(errors)) => {
            eprintln!("{errors}");
            std::process::exit(1);
        }
        Err(err) => return Err(err),
    };

    let level = ctx.core().log_level.map(tracing::Level::from).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_str()))
        .init();

    tracing::info!(core = ?ctx.core(), "core settings");
    tracing::info!(config = ?ctx.config(), "application settings");
    Ok(())
}
