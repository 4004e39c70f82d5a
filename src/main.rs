use browser_form_demo::{demo, Browser};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> browser_form_demo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Browser::builder()
        .headless(false) // set to true for headless runs
        .arg("verbose")
        .arg("disable-notifications")
        .build_config();

    // Launch/context errors land here and surface on stderr with a
    // nonzero exit; everything later is handled inside the demo.
    demo::run(config).await
}
