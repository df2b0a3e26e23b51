#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kartubahasa_backend::run().await
}
