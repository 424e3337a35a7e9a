// twitter-cli/src/commands/setup.rs
use crate::config::Config;
use crate::output::{print_error, print_success, ExitCode};
use anyhow::Result;
use dialoguer::Password;
use twitter_client::{AccountVerifyParams, ReqwestClient, TwitterClient};

/// Run the interactive setup command. `api_url` is where the token is
/// validated; only the token is written to the config file.
pub async fn run_setup(api_url: &str) -> Result<ExitCode> {
    println!("Twitter CLI Setup");
    println!();

    // Prompt for bearer token
    let token = Password::new()
        .with_prompt("Enter your Twitter API bearer token")
        .interact()?;

    if token.is_empty() {
        print_error("Bearer token cannot be empty");
        return Ok(ExitCode::PermanentError);
    }

    println!();
    println!("Validating credentials...");

    let http = ReqwestClient::new().with_token(token.clone());
    let client = TwitterClient::with_base_url(http, api_url);
    let params = AccountVerifyParams {
        skip_status: Some(true),
        ..Default::default()
    };

    match client.accounts().verify_credentials(&params).await {
        Ok(resp) => {
            if let Err(e) = Config::save_token(token) {
                print_error(&format!("Couldn't write config file: {}", e));
                return Ok(ExitCode::PermanentError);
            }

            print_success(&format!("Credentials saved for @{}", resp.data.screen_name));
            println!();
            println!("Try: twitter account settings");

            Ok(ExitCode::Success)
        }
        Err(e) => {
            print_error(&e.to_string());
            eprintln!();
            eprintln!("Visit https://developer.twitter.com/en/portal/dashboard");
            eprintln!("to create a bearer token.");
            Ok(ExitCode::for_error(&e))
        }
    }
}
