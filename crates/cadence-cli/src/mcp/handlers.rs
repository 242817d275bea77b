//! MCP tool handlers implementation

use std::sync::Arc;

use cadence_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{CreateGoal, DeleteGoal, Id, SaveReview, SetEstimate, SubmitWork, ViewSchedule},
    Planner,
};
use log::debug;
use rmcp::{
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        Prompt, PromptArgument, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    ErrorData as McpError,
};
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

pub type McpResult = Result<CallToolResult, McpError>;

fn text(result: impl ToString) -> CallToolResult {
    CallToolResult::success(vec![Content::text(result.to_string())])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_goal(&self, params: CreateGoal) -> McpResult {
        debug!("create_goal: {params:?}");

        let goal = self
            .planner
            .lock()
            .await
            .create_goal(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create goal", &e))?;

        Ok(text(CreateResult::new(goal)))
    }

    pub async fn list_goals(&self) -> McpResult {
        debug!("list_goals");

        let goals = self
            .planner
            .lock()
            .await
            .list_goals_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to list goals", &e))?;

        if goals.is_empty() {
            return Ok(text(goals));
        }
        Ok(text(format!("# Learning Goals\n\n{goals}")))
    }

    pub async fn show_goal(&self, params: Id) -> McpResult {
        debug!("show_goal: {params:?}");

        let goal = self
            .planner
            .lock()
            .await
            .get_goal(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to get goal", &e))?
            .ok_or_else(|| {
                McpError::invalid_params(format!("Goal with ID {} not found", params.id), None)
            })?;

        Ok(text(goal))
    }

    pub async fn delete_goal(&self, params: DeleteGoal) -> McpResult {
        debug!("delete_goal: {params:?}");

        let deleted = self
            .planner
            .lock()
            .await
            .delete_goal(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete goal", &e))?
            .ok_or_else(|| {
                McpError::invalid_params(format!("Goal with ID {} not found", params.id), None)
            })?;

        Ok(text(DeleteResult::new(deleted)))
    }

    /// Markdown for reading, followed by the JSON wire shape for programs.
    pub async fn show_schedule(&self, params: ViewSchedule) -> McpResult {
        debug!("show_schedule: {params:?}");

        let response = self
            .planner
            .lock()
            .await
            .schedule_view(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to build schedule", &e))?;

        let json = serde_json::to_string_pretty(&response).map_err(|e| {
            McpError::internal_error(format!("Failed to encode schedule: {e}"), None)
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(response.to_string()),
            Content::text(json),
        ]))
    }

    pub async fn show_step(&self, params: Id) -> McpResult {
        debug!("show_step: {params:?}");

        let details = self
            .planner
            .lock()
            .await
            .show_step_details(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to get step", &e))?
            .ok_or_else(|| {
                McpError::invalid_params(format!("Step with ID {} not found", params.id), None)
            })?;

        Ok(text(details))
    }

    pub async fn complete_step(&self, params: Id) -> McpResult {
        debug!("complete_step: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .complete_step(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to complete step", &e))?;

        Ok(text(result))
    }

    pub async fn reopen_step(&self, params: Id) -> McpResult {
        debug!("reopen_step: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .reopen_step(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to reopen step", &e))?;

        Ok(text(result))
    }

    pub async fn skip_step(&self, params: Id) -> McpResult {
        debug!("skip_step: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .skip_step_result(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to skip step", &e))?;

        Ok(text(result))
    }

    pub async fn set_estimate(&self, params: SetEstimate) -> McpResult {
        debug!("set_estimate: {params:?}");

        let step = self
            .planner
            .lock()
            .await
            .set_step_estimate(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to set estimate", &e))?;

        let status = match step.estimated_minutes {
            Some(minutes) => {
                OperationStatus::success(format!("Step {} estimated at {minutes} min", step.id))
            }
            None => OperationStatus::success(format!("Cleared estimate of step {}", step.id)),
        };
        Ok(text(status))
    }

    pub async fn submit_work(&self, params: SubmitWork) -> McpResult {
        debug!("submit_work: step {}", params.step_id);

        let submission = self
            .planner
            .lock()
            .await
            .submit_work(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to submit work", &e))?;

        Ok(text(CreateResult::new(submission)))
    }

    pub async fn save_review(&self, params: SaveReview) -> McpResult {
        debug!("save_review: step {}", params.step_id);

        let review = self
            .planner
            .lock()
            .await
            .save_review(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to save review", &e))?;

        Ok(text(CreateResult::new(review)))
    }

    pub async fn show_review(&self, params: Id) -> McpResult {
        debug!("show_review: {params:?}");

        let review = self
            .planner
            .lock()
            .await
            .get_review(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to get review", &e))?;

        match review {
            Some(review) => Ok(text(review)),
            None => Ok(text(format!("Step {} has no review yet.", params.id))),
        }
    }

    /// List all available prompts
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    template.name,
                    Some(template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.to_string(),
                                title: None,
                                description: Some(arg.description.to_string()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a specific prompt by name and apply arguments
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = get_prompt_templates()
            .into_iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let prompt_text = template
            .render(|name| {
                let value = request.arguments.as_ref()?.get(name)?;
                match value.as_str() {
                    Some(s) => Some(s.to_string()),
                    None => Some(value.to_string()),
                }
            })
            .map_err(|message| McpError::invalid_params(message, None))?;

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
