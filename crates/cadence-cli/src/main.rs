//! Cadence CLI Application
//!
//! Command-line interface and MCP server for the cadence learning-plan
//! scheduler.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::PlannerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, CadenceMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    match command {
        Some(Goal { command }) => {
            Cli::new(planner, renderer)
                .handle_goal_command(command)
                .await
        }
        Some(Step { command }) => {
            Cli::new(planner, renderer)
                .handle_step_command(command)
                .await
        }
        Some(Schedule(args)) => Cli::new(planner, renderer).schedule(args, today).await,
        Some(Serve) => {
            info!("Starting Cadence MCP server");
            run_stdio_server(CadenceMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_goals().await,
    }
}
