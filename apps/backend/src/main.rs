#[tokio::main]
async fn main() -> anyhow::Result<()> {
    smartlex_backend::run().await
}
