//! Logging setup for binaries and demos.

/// Installs `env_logger` as the global logger.
///
/// Honors `RUST_LOG`. Safe to call more than once; only the first call has an
/// effect, so libraries embedding cubemarch can keep their own logger.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("cubemarch logging initialized");
    }
}
