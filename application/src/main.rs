use std::{io, process::ExitCode, sync::OnceLock};

use application::{seed::Dataset, AsError as _, Args, Config, Service};
use service::infra::Memory;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    // Standard output is reserved for reports.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL
                            .get()
                            .copied()
                            .unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        data,
        calendar,
        clock,
        log,
    } = Config::new(&config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let db = Memory::new();
    let (employees, leaves) = Dataset::load(&data.path)
        .and_then(|dataset| dataset.populate(&db))
        .map_err(|e| {
            log::error!("failed to seed `{}`: {}", data.path, e.into_error());
        })?;
    log::info!(employees, leaves, "seeded from `{}`", data.path);

    let service = Service::new(calendar.into(), db);

    application::run(
        &service,
        command,
        clock.today(),
        &mut io::stdout().lock(),
    )
    .map_err(|e| log::error!("{e}"))
}
