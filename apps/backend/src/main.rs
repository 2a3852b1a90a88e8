#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vietcards_backend::run().await
}
