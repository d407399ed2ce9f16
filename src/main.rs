use anyhow::Result;

use gweid_utils::demo::run_demo;
use gweid_utils::merge::deep_merge;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut stdout = std::io::stdout();
    run_demo(&mut stdout, deep_merge)?;

    Ok(())
}
