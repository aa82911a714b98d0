//! whois - query whois servers, picking the right one automatically.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match whois_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("whois: {err}");
            ExitCode::from(2)
        }
    }
}
