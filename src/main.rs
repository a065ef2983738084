use anyhow::Result;

// One logical thread: the spawn timer, frame timer and key presses never run in parallel.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    wordfall::cli::run_cli().await
}
