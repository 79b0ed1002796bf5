#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    ezpay::run().await
}
