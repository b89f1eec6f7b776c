#[tokio::main]
async fn main() -> anyhow::Result<()> {
    brandcircle_server::start().await
}
