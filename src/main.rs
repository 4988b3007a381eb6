use anyhow::Result;
use tracing::{debug, error};

use bvmem::{Footprint, MemoryReport, NUM_BITS};

fn main() -> Result<()> {
    setup_logging();

    let bv = bvmem::generate().inspect_err(|e| error!("{e:#}"))?;
    let bytes = bv.size_in_bytes();
    debug!(
        bytes,
        handle_bytes = bv.handle_bytes(),
        total_bytes = bv.total_bytes(),
        "measured bit vector"
    );

    MemoryReport::new(NUM_BITS, bytes).write_to(std::io::stdout().lock())
}

/// Logs to stderr at `WARN` and above; the library's `debug!` events stay silent
/// so a successful run writes nothing but the report.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
}
