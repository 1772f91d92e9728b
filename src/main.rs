use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
  match activity_tracker_lib::run().await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}
