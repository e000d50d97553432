use anyhow::Context;
use slint::ComponentHandle;
use wikilook_config::Config;
use wikilook_core::SelectionWatcher;
use wikilook_io::SystemClipboard;
use wikilook_lookup::{LookupClient, WikipediaSource};
use wikilook_ui::SlintPopupHost;

pub mod controller;
pub mod logging;

use self::controller::AppController;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = Config::new();
    tracing::info!("Using {}", config.lookup.endpoint);

    let source =
        WikipediaSource::new(&config.lookup).context("Failed to build HTTP client")?;
    let client = LookupClient::new(source, config.lookup.cache_capacity);
    let host = SlintPopupHost::new(client, config.popup.clone());
    let watcher = SelectionWatcher::new(SystemClipboard::new(), host, &config.watch);

    let shell = wikilook_ui::build_shell()?;
    let controller = AppController::new(watcher, &shell);
    controller.start(&config.watch);

    shell.run().context("Event loop failed")?;

    controller.shutdown();
    tracing::info!("Exited");
    Ok(())
}
