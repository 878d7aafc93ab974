use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure is fatal: the error propagates out of main, no retry
    let listener = server::create_listener(addr)?;

    logger::log_server_start(cfg.server.port, &cfg.root_display_path());

    let shutdown = Arc::new(server::ShutdownSignal::new());
    server::start_signal_listener(Arc::clone(&shutdown));

    server::run(listener, Arc::new(cfg), shutdown).await;

    // Reached only after the accept loop has observed shutdown, so the
    // stop line prints exactly once
    logger::log_server_stopped();
    Ok(())
}
