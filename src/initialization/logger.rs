//! Logger initialization.

use log::LevelFilter;

/// Initializes `env_logger` at the given level.
///
/// `RUST_LOG` is honoured as the base configuration; the explicit `level`
/// argument overrides it so CLI flags take precedence over the environment.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder.filter_level(level);
    let _ = builder.try_init();
}
