// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paysafe bridges — demo driver.
//
// Entry point. Initialises logging, parses the command line, and runs one
// demo screen. Native modules are not linked in this binary, so the wallet
// screens show the platform gating and linking errors a misconfigured app
// would hit.

mod screens;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use paysafe_core::Platform;

#[derive(Debug, Parser)]
#[command(name = "paysafe-demo", version, about = "Exercise the Paysafe payment bridges")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check raw card fields.
    Card {
        #[arg(long)]
        number: String,
        #[arg(long)]
        month: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        cvv: String,
    },
    /// Validate an Apple Pay tokenize request (JSON file).
    Options { file: PathBuf },
    /// Normalize a native tokenize response (JSON file).
    Normalize { file: PathBuf },
    /// Tokenize through the Apple Pay facade.
    ApplePay {
        file: PathBuf,
        #[arg(long, default_value_t = Platform::current())]
        platform: Platform,
    },
    /// Tokenize through the Google Pay facade.
    GooglePay {
        file: PathBuf,
        #[arg(long, default_value_t = Platform::current())]
        platform: Platform,
    },
    /// Load and validate an SDK config file.
    Config { file: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "paysafe-demo starting");

    let output = match cli.command {
        Command::Card {
            number,
            month,
            year,
            cvv,
        } => Ok(screens::card(&number, &month, &year, &cvv)),
        Command::Options { file } => screens::options(&file),
        Command::Normalize { file } => screens::normalize(&file),
        Command::ApplePay { file, platform } => screens::apple_pay(&file, platform),
        Command::GooglePay { file, platform } => screens::google_pay(&file, platform),
        Command::Config { file } => screens::config(&file),
    };

    match output.and_then(|value| Ok(serde_json::to_string_pretty(&value)?)) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "demo screen failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
