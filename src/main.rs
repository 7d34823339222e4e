use anyhow::Result;
use readlater::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
