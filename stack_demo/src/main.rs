//!
//! Walks a string stack through its whole lifecycle: create, inspect, push,
//! inspect, search, pop, destroy. Set `RUST_LOG=trace` to see the stack's own
//! bookkeeping.
//!
use std::io::Write;
use std::sync::Once;

use clap::Parser;

mod driver;
mod handlers;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Item to push, in push order. Repeat for more items
    #[arg(long = "item", value_name = "ITEM", default_values = ["cat", "dog", "fish", "horse"])]
    items: Vec<String>,

    /// Item to search for after all pushes. Repeat for more searches
    #[arg(long = "search", value_name = "TARGET", default_values = ["dog", "butterfly", "cat", "minnow"])]
    searches: Vec<String>,

    /// Number of items left on the stack for the destructor
    #[arg(long, default_value_t = 0)]
    keep: usize,
}

impl Cli {
    fn into_config(self) -> driver::DemoConfig {
        driver::DemoConfig {
            items: self.items,
            searches: self.searches,
            keep: self.keep,
        }
    }
}

static INIT_LOGGER_ONCE: Once = Once::new();
fn init_logger() {
    INIT_LOGGER_ONCE.call_once(env_logger::init);
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let config = Cli::parse().into_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = driver::run(&config, &mut out)?;
    out.flush()?;

    log::info!(
        "demo finished: {} found, {} popped, {} destroyed",
        summary.found,
        summary.popped.len(),
        summary.destroyed
    );

    Ok(())
}
