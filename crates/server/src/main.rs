#[tokio::main]
async fn main() -> anyhow::Result<()> {
    forkful_server::start().await
}
