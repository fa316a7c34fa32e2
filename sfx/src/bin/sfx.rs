// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_sfx::{CommonResult, ok, set_mimalloc_in_main,
               setup::{CLIArg, CLICommand, CommandRunDetails, handle_fetch_command,
                       handle_setup_command},
               try_initialize_logging_global};

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    if cli_arg.global_options.no_color {
        crossterm::style::force_color_output(false);
    }

    launch_sfx(cli_arg).await?;

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}

pub async fn launch_sfx(cli_arg: CLIArg) -> CommonResult<()> {
    // Execute the selected command.
    let res = try_run_command(&cli_arg).await;

    // Handle the result of the command execution.
    match res {
        // This branch is for both successful and unsuccessful command executions. Even
        // though the `res` is not `Err` it does not mean that the command ran
        // successfully, it may have failed gracefully (eg: a fetch that could not
        // connect).
        Ok(details) => {
            display_command_result(&details);
            ok!()
        }
        // This branch is for unrecoverable errors, eg: the asset folder could not be
        // created. The report propagates out of `main`, which exits non-zero and
        // renders the diagnostic.
        Err(report) => {
            report_unrecoverable_errors(&report);
            Err(report)
        }
    }
}

pub async fn try_run_command(cli_arg: &CLIArg) -> CommonResult<CommandRunDetails> {
    match &cli_arg.command {
        Some(CLICommand::Fetch { url, destination }) => {
            handle_fetch_command(url, destination).await
        }
        // Bare `sfx` runs setup.
        Some(CLICommand::Setup) | None => handle_setup_command(),
    }
}

/// Display the result of the command execution.
pub fn display_command_result(details: &CommandRunDetails) {
    println!("{details}");
}

/// Unknown and unrecoverable errors: the asset folder could not be created.
pub fn report_unrecoverable_errors(report: &miette::Report) {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Could not run sfx due to the following problem",
        error = ?report
    );
}
