use aquacal::components::holidays::ReqwestTransport;
use aquacal::startup;
use aquacal::utils::time::SystemClock;
use tracing::info;

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting aquacal");

    // Load configuration
    let config = startup::load_config()?;

    startup::run(&config, ReqwestTransport::new(), &SystemClock)?;
    Ok(())
}
