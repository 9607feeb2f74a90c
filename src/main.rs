use clap::Parser;
use pearce::{Cli, Runtime};

#[tokio::main(flavor = "current_thread")]
async fn main() {
  let cli = Cli::parse();
  let exit_code = Runtime::new(cli).execute().await;
  std::process::exit(exit_code);
}
