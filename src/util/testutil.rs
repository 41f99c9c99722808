use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the random seed used at the start of the current test run.
pub(crate) fn random_seed() -> u32 {
    let seed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as u32;
    log::debug!("test run seed {}", seed);
    seed
}

/// Route crate log records to the test harness output.  Safe to call
/// from every test; only the first call installs the logger.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
