// src/main.rs

use workerkit::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("workerkit error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<i32> {
    let argv: Vec<String> = std::env::args().collect();
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args, &argv).await
}
