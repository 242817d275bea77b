//! MCP server implementation for Cadence
//!
//! Exposes the planner to AI assistants over the Model Context Protocol.
//! An assistant generates the five steps of a goal (see the `plan_goal`
//! prompt), stores them with `create_goal`, and reads the rolling schedule
//! with `show_schedule`, which runs the same assign and reschedule pipeline
//! as the CLI.

use std::sync::Arc;

use anyhow::Result;
use cadence_core::{
    params::{CreateGoal, DeleteGoal, Id, SaveReview, SetEstimate, SubmitWork, ViewSchedule},
    Planner,
};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::McpResult;

/// MCP server for Cadence
#[derive(Clone)]
pub struct CadenceMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CadenceMcpServer {
    /// Create a new Cadence MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_goal",
        description = "Create a learning goal with exactly five steps (indices 1 to 5). Each step needs a title, a task and a deliverable; estimated_minutes is optional. skill_type is 'nextjs', 'go' or 'gcp'. Optional deadline and start_date are YYYY-MM-DD; duration is the study period in days. Steps start unscheduled and get days on the first show_schedule."
    )]
    async fn create_goal(&self, Parameters(params): Parameters<CreateGoal>) -> McpResult {
        self.handlers().create_goal(params).await
    }

    #[tool(
        name = "list_goals",
        description = "List all learning goals with their skill, dates and progress (done steps out of five)."
    )]
    async fn list_goals(&self) -> McpResult {
        self.handlers().list_goals().await
    }

    #[tool(
        name = "show_goal",
        description = "Show a goal with all five steps, including each step's scheduled day, status, estimate and deliverable."
    )]
    async fn show_goal(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_goal(params).await
    }

    #[tool(
        name = "delete_goal",
        description = "Permanently delete a goal with its steps and submissions. Requires confirmed=true. This cannot be undone."
    )]
    async fn delete_goal(&self, Parameters(params): Parameters<DeleteGoal>) -> McpResult {
        self.handlers().delete_goal(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Show the next 14 days of a goal's schedule. Unscheduled steps are placed first (at most two per day, in step order), then missed or skipped steps are moved to the earliest open day. Returns markdown followed by JSON with days, tasks and alerts for tasks past the deadline or study period. Pass today (YYYY-MM-DD) to plan from another day."
    )]
    async fn show_schedule(&self, Parameters(params): Parameters<ViewSchedule>) -> McpResult {
        self.handlers().show_schedule(params).await
    }

    #[tool(
        name = "show_step",
        description = "Show one step with its schedule, deliverable and submitted work."
    )]
    async fn show_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_step(params).await
    }

    #[tool(
        name = "complete_step",
        description = "Mark a step done. Done steps keep their day and are never rescheduled."
    )]
    async fn complete_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().complete_step(params).await
    }

    #[tool(
        name = "reopen_step",
        description = "Mark a done step as not done again. If its day has passed it shows as missed and is moved on the next show_schedule."
    )]
    async fn reopen_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().reopen_step(params).await
    }

    #[tool(
        name = "skip_step",
        description = "Skip a step. It is moved to the earliest open day on the next show_schedule."
    )]
    async fn skip_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().skip_step(params).await
    }

    #[tool(
        name = "set_estimate",
        description = "Set a step's estimated minutes, or clear it by omitting minutes."
    )]
    async fn set_estimate(&self, Parameters(params): Parameters<SetEstimate>) -> McpResult {
        self.handlers().set_estimate(params).await
    }

    #[tool(
        name = "submit_work",
        description = "Submit the deliverable for a step as code (content_type 'code', the default) or a link (content_type 'url'). Replaces any earlier submission."
    )]
    async fn submit_work(&self, Parameters(params): Parameters<SubmitWork>) -> McpResult {
        self.handlers().submit_work(params).await
    }

    #[tool(
        name = "save_review",
        description = "Save Keep/Problem/Try/Next feedback on a step's submitted work. Each of keep, problem, try and next must be 10 to 2000 characters. Replaces any earlier review of the step."
    )]
    async fn save_review(&self, Parameters(params): Parameters<SaveReview>) -> McpResult {
        self.handlers().save_review(params).await
    }

    #[tool(
        name = "show_review",
        description = "Show the Keep/Problem/Try/Next review of a step, if it has one."
    )]
    async fn show_review(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_review(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CadenceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "cadence".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Cadence schedules five-step learning plans.

## Core Concepts
- **Goals**: something a learner wants to achieve with Next.js, Go or GCP, with an optional deadline or study period
- **Steps**: exactly five per goal, each with a task and a deliverable
- **Schedule**: a rolling 14-day view starting today, at most two steps per day

## Workflow
1. Use the `plan_goal` prompt (or your own judgement) to write five steps
2. Store them with `create_goal`
3. Call `show_schedule` to place the steps on days; call it again whenever the learner returns
4. Record progress with `complete_step`, `skip_step` and `submit_work`
5. Give feedback on submitted work with the `review_step` prompt and `save_review`

## Scheduling Rules
- Unscheduled steps are placed in step order from today, two per day
- Scheduled steps whose day has passed show as missed; missed and skipped steps move to the earliest open day in the window
- Done steps never move
- Alerts list tasks that fall after the deadline or outside the study period"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(&request)
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CadenceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cadence MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
