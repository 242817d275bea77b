//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders. Optional arguments that were not
    /// given read as "not set".
    pub fn render(&self, value_of: impl Fn(&str) -> Option<String>) -> Result<String, String> {
        let mut text = self.template.to_string();
        for arg in &self.arguments {
            let value = match value_of(arg.name) {
                Some(value) => value,
                None if arg.required => {
                    return Err(format!("Required argument '{}' is missing", arg.name))
                }
                None => "not set".to_string(),
            };
            text = text.replace(&format!("{{{}}}", arg.name), &value);
        }
        Ok(text)
    }
}

/// Prompt templates offered by the server
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![plan_goal(), review_step()]
}

fn plan_goal() -> PromptTemplate {
    PromptTemplate {
        name: "plan_goal",
        description: "Break a learning goal into five steps and schedule them with Cadence",
        template: r#"You are a learning coach helping someone practise {skill_type}.

# Goal
{goal_text}

- Deadline: {deadline}
- First day of study: {start_date}
- Study period (days): {duration}

# Your Task
Design exactly five steps that take the learner from where they are to the
goal. Each step should fit in one sitting of about an hour.

Every step needs:
- **index**: 1 to 5, in the order the learner should do them
- **title**: short, starts with a verb
- **task**: what to do, concretely enough to start without further research
- **deliverable**: what the learner hands in (a repository link, a deployed
  URL, a code snippet)
- **estimated_minutes**: optional effort estimate

# Then
1. Call `create_goal` with `skill_type`, `goal_text`, any dates given above
   (YYYY-MM-DD) and the five steps.
2. Call `show_schedule` with the new goal ID. Cadence places at most two
   steps per day starting today.
3. Summarise the schedule for the learner. If the response contains alerts,
   explain them and suggest either a later deadline or a longer study
   period."#,
        arguments: vec![
            PromptTemplateArg {
                name: "skill_type",
                description: "Technology to learn: nextjs, go or gcp",
                required: true,
            },
            PromptTemplateArg {
                name: "goal_text",
                description: "What the learner wants to achieve",
                required: true,
            },
            PromptTemplateArg {
                name: "deadline",
                description: "Optional deadline (YYYY-MM-DD)",
                required: false,
            },
            PromptTemplateArg {
                name: "start_date",
                description: "Optional first day of study (YYYY-MM-DD)",
                required: false,
            },
            PromptTemplateArg {
                name: "duration",
                description: "Optional study period in days",
                required: false,
            },
        ],
    }
}

fn review_step() -> PromptTemplate {
    PromptTemplate {
        name: "review_step",
        description: "Review the work submitted for a step and save Keep/Problem/Try/Next feedback",
        template: r#"You are a learning coach reviewing work for step {step_id}.

# Before You Start
Call `show_step` with id {step_id}. It shows the task, the expected
deliverable and the learner's submission.

Notes from the learner: {notes}

# Your Task
Write a short, encouraging review in four parts:
- **keep**: what the learner did well and should keep doing
- **problem**: the most important thing to improve
- **try**: one concrete technique or change to try next time
- **next**: what to learn or build after this step

Each part must be 10 to 2000 characters. Be specific to the submitted work;
quote code or name files where it helps.

# Then
Call `save_review` with `step_id` {step_id} and the four parts. If the step
has no submission yet, do not save a review; ask the learner to submit their
work with `submit_work` first."#,
        arguments: vec![
            PromptTemplateArg {
                name: "step_id",
                description: "ID of the step to review",
                required: true,
            },
            PromptTemplateArg {
                name: "notes",
                description: "Optional notes from the learner about the work",
                required: false,
            },
        ],
    }
}
