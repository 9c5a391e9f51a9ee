//! Terminal client for signing in to the MindFit admin dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (prompts for email and password)
//! cargo run -- login
//!
//! # Sign in with the email pre-filled
//! cargo run -- login --email admin@mindfit.com
//!
//! # Show the stored session
//! cargo run -- status
//!
//! # Forget the stored session
//! cargo run -- logout
//! ```
//!
//! # Environment Variables
//!
//! See [`mindfit_admin_login::config`]. A `.env` file is honoured.

use mindfit_admin_login::application::services::{
    LoginWorkflow, SIGNING_IN_MESSAGE, SubmitOutcome,
};
use mindfit_admin_login::config::{self, Config};
use mindfit_admin_login::domain::entities::{LoginForm, Session};
use mindfit_admin_login::infrastructure::http::HttpAuthGateway;
use mindfit_admin_login::infrastructure::session::FileSessionStore;
use mindfit_admin_login::infrastructure::terminal::{TerminalNavigator, TerminalNotifier};
use mindfit_admin_login::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;

type Gateway = HttpAuthGateway<FileSessionStore>;

/// Sign in to the MindFit admin dashboard.
#[derive(Parser)]
#[command(name = "mindfit-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Pre-fill the email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show the stored session
    Status,

    /// Forget the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    let store = Arc::new(FileSessionStore::new(&config.session_file));
    let gateway = Arc::new(
        HttpAuthGateway::new(&config.api_base()?, config.request_timeout(), store)
            .context("Failed to set up the authentication client")?,
    );

    match cli.command {
        Commands::Login { email } => handle_login(&config, gateway, email).await?,
        Commands::Status => handle_status(&gateway)?,
        Commands::Logout => handle_logout(&gateway)?,
    }

    Ok(())
}

/// Runs the interactive sign-in.
///
/// # Flow
///
/// 1. Redirect straight away if a valid session is already stored
/// 2. Prompt for email and password
/// 3. Submit; on invalid input show the field hints and prompt again
/// 4. On rejection offer a retry
async fn handle_login(config: &Config, gateway: Arc<Gateway>, email: Option<String>) -> Result<()> {
    println!("{}", "🔐 MindFit Admin Dashboard".bright_blue().bold());
    println!();

    let workflow = LoginWorkflow::new(
        gateway,
        Arc::new(TerminalNavigator::new()),
        Arc::new(TerminalNotifier::new()),
    )
    .with_landing_route(&config.landing_route);

    if workflow.check_existing_session() {
        println!("{}", "  Already signed in".green());
        return Ok(());
    }

    let mut form = LoginForm::new();
    if let Some(email) = email {
        form.email.set(email);
    }

    loop {
        prompt_credentials(&mut form)?;

        if form.is_valid() {
            println!("{}", SIGNING_IN_MESSAGE.bright_black());
        }

        match workflow.submit(&mut form).await {
            SubmitOutcome::Authenticated(session) => {
                print_session(&session);
                return Ok(());
            }
            SubmitOutcome::Invalid(_) => {
                for (field, _) in form.visible_errors() {
                    println!("  {}", field.hint().yellow());
                }
                println!();
            }
            SubmitOutcome::Failed { .. } => {
                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;

                if !retry {
                    anyhow::bail!("Sign-in cancelled");
                }

                workflow.dismiss_error();
                form.password.set(String::new());
            }
            SubmitOutcome::Ignored => {}
        }
    }
}

/// Prompts for both fields, keeping the previous email as the initial text.
fn prompt_credentials(form: &mut LoginForm) -> Result<()> {
    let email: String = Input::new()
        .with_prompt("Email address")
        .with_initial_text(form.email.value())
        .allow_empty(true)
        .interact_text()?;
    form.email.set(email.trim());

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    form.password.set(password);

    Ok(())
}

/// Displays the stored session.
///
/// # Output Format
///
/// ```text
/// ℹ️  Session
///
///   Email:   admin@mindfit.com
///   Issued:  2026-10-19 09:12
///   Expires: 2026-10-19 21:12
///   Status:  ACTIVE
/// ```
fn handle_status(gateway: &Gateway) -> Result<()> {
    println!("{}", "ℹ️  Session".bright_blue().bold());
    println!();

    match gateway
        .current_session()
        .context("Failed to read the stored session")?
    {
        Some(session) => print_session(&session),
        None => {
            println!("  {}", "Not signed in".yellow());
            println!();
            println!("  Sign in with: {} login", "mindfit-admin".bright_cyan());
        }
    }

    println!();
    Ok(())
}

fn print_session(session: &Session) {
    let status = if session.is_expired() {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    };

    let expires = session
        .expires_at
        .map(|e| e.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("  Email:   {}", session.email.cyan());
    println!(
        "  Issued:  {}",
        session
            .issued_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!("  Expires: {}", expires.bright_black());
    println!("  Status:  {}", status);
}

fn handle_logout(gateway: &Gateway) -> Result<()> {
    gateway
        .logout()
        .context("Failed to clear the stored session")?;

    println!("{}", "✅ Signed out".green().bold());
    Ok(())
}
