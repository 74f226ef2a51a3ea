use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` is honoured; `--trace` lifts both
/// crates to debug so every accumulated term is reported.
pub fn init(trace: bool) -> Result<(), Box<dyn Error>> {
    let mut filter = EnvFilter::from_default_env();
    if trace {
        filter = filter
            .add_directive("sqrtsum=debug".parse()?)
            .add_directive("sqrtsum_core=debug".parse()?);
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        filter = filter.add_directive("sqrtsum=warn".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)
}
