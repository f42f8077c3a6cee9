#[tokio::main]
async fn main() {
    if let Err(err) = eq_api::run().await {
        eprintln!("eq-api failed to start: {err}");
        std::process::exit(1);
    }
}
