use anyhow::Context;
use dzemat::kernel::config::load_config;
use dzemat_logger::Logger;
use dzemat_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
