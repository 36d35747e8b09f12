/// Concurrency management for Taintrace.
/// Configures the rayon pool that runs per-seed propagation walks.

use anyhow::Result;
use log::debug;

/// Initialize the global rayon thread pool.
/// `workers = None` sizes the pool to the machine's core count.
pub fn init_thread_pool(workers: Option<usize>) -> Result<()> {
    let cores = num_cpus::get();
    let workers = workers.unwrap_or(cores).max(1);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    debug!("initialized thread pool: {} workers ({} cores)", workers, cores);

    Ok(())
}
