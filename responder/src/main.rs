use std::error::Error;
use std::sync::Arc;

use configuration::ResponderConfiguration;
use resolution::{RecordStore, Resolver};
use responder::Dispatcher;
use tracing_subscriber::EnvFilter;

mod cli_args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: cli_args::CliArgs = argh::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut cfg = ResponderConfiguration::load(args.config)?;
    if let Some(port) = args.port {
        cfg.server.override_port(port);
    }

    let store = cfg.record_store()?;
    log_records(&store);

    let resolver = Arc::new(Resolver::new(store));
    let dispatcher = Dispatcher::bind(
        cfg.server.bind_address(),
        resolver,
        cfg.server.max_in_flight(),
    )
    .await?;

    tracing::info!(
        addr = %dispatcher.local_addr()?,
        pid = std::process::id(),
        max_in_flight = ?cfg.server.max_in_flight(),
        "listening"
    );

    dispatcher.run().await;

    Ok(())
}

fn log_records(store: &RecordStore) {
    tracing::info!(count = store.len(), "loaded record table");
    for (key, value) in store.iter() {
        tracing::info!(qname = %key.name, qtype = %key.q_type, value, "serving record");
    }
}
