use smarthire_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("smarthire error: {err}");
        std::process::exit(1);
    }
}
