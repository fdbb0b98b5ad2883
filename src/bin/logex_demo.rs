use std::thread;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use logex::configure::load_config;
use logex::logger::setup_logger;
use logex::{
    cleanup_thread_local, ex_debug, ex_info, ex_warn, fx_debug, fx_info, me, or_null, Logger,
    EXCEPTION_THROWN, SHORT_RUN, STARTING, STOPPED,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Worker threads to spawn
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Log calls per worker
    #[arg(long, default_value_t = 3)]
    calls: usize,

    /// Override the configured log level
    #[arg(long)]
    level: Option<String>,
}

fn settle(logger: &Logger<'_>, worker: usize, batch: usize) -> Result<()> {
    let name = me!()?;
    fx_debug!(logger, "{} worker={} batch={}", name, worker, batch);

    let fill: Option<u64> = if batch % 2 == 0 { Some(batch as u64 * 100) } else { None };
    ex_info!(logger, name, worker, batch, or_null(fill));
    Ok(())
}

fn run_worker(worker: usize, calls: usize) -> Result<()> {
    let logger = Logger::global("demo.worker");
    ex_debug!(logger, me!()?, worker, STARTING);

    for batch in 0..calls {
        settle(&logger, worker, batch)?;
    }

    ex_debug!(logger, me!()?, worker, STOPPED);
    // pooled threads would release their buffer at drain time
    cleanup_thread_local();
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let mut settings = load_config()?;
    if let Some(level) = args.level {
        settings.log_level = level;
    }
    setup_logger(&settings)?;

    let logger = Logger::global("demo");
    fx_info!(logger, "spawning {} workers x {} calls", args.threads, args.calls);
    ex_info!(logger, me!()?, SHORT_RUN);

    let handles: Vec<_> = (0..args.threads)
        .map(|worker| thread::spawn(move || run_worker(worker, args.calls)))
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => ex_warn!(logger, me!()?, EXCEPTION_THROWN),
        }
    }

    fx_info!(
        logger,
        "{} call sites cached (populated={})",
        logex::cache_size(),
        logex::is_cache_populated()
    );
    Ok(())
}
