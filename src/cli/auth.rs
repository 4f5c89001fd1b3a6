//! Auth command - test and explain credential setup

use crate::cli::style::{Stylize, check, cross};
use revu::auth::{AuthSource, get_github_token, test_github_auth};
use revu::error::Result;

/// Run the auth command
pub async fn run_auth(action: &str) -> Result<()> {
    match action {
        "test" => test().await,
        _ => {
            setup();
            Ok(())
        }
    }
}

async fn test() -> Result<()> {
    match get_github_token().await {
        Ok((token, source)) => {
            let source_str = match source {
                AuthSource::Cli => "gh CLI",
                AuthSource::EnvVar => "environment variable",
            };
            match test_github_auth(&token).await {
                Ok(login) => {
                    println!(
                        "{} GitHub: authenticated as {} ({source_str})",
                        check(),
                        login.accent()
                    );
                }
                Err(err) => {
                    eprintln!("{} GitHub: token rejected: {err}", cross());
                    return Err(err);
                }
            }
        }
        Err(err) => {
            eprintln!("{} GitHub: {err}", cross());
            return Err(err);
        }
    }

    if std::env::var("OPENAI_API_KEY").is_ok() {
        println!("{} OpenAI: OPENAI_API_KEY is set", check());
    } else {
        eprintln!("{} OpenAI: OPENAI_API_KEY is not set", cross());
    }

    Ok(())
}

fn setup() {
    println!("{}", "GitHub authentication".emphasis());
    println!("  1. Run {} (recommended), or", "gh auth login".accent());
    println!(
        "  2. Set {} or {} to a personal access token with repo scope",
        "GITHUB_TOKEN".accent(),
        "GH_TOKEN".accent()
    );
    println!();
    println!("{}", "OpenAI authentication".emphasis());
    println!("  Set {} to an API key", "OPENAI_API_KEY".accent());
}
