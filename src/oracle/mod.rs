//! AI oracle client: breakdown, schedule suggestions, insights.
//!
//! Each operation builds a prompt, sends one completion through the
//! `LlmClient` port, and parses the structured response into typed
//! drafts for the caller to merge into the store. The oracle never
//! mutates the store itself. Any transport or parse failure degrades to
//! the documented empty/absent fallback and is logged — callers are
//! never interrupted by oracle errors.

use std::env;
use std::fmt::Write as _;

use serde::Deserialize;

use crate::context::ServiceContext;
use crate::ports::llm::CompletionRequest;
use crate::task::{Priority, ScheduleSuggestion, SubtaskDraft, Task};

/// Model used when `AIDO_MODEL` is not set.
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

fn model() -> String {
    env::var("AIDO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// Asks the oracle to decompose one task into 3–5 actionable subtasks.
///
/// Returns an empty vec when the oracle is unreachable or its response
/// does not parse.
pub async fn breakdown(ctx: &ServiceContext, task_text: &str) -> Vec<SubtaskDraft> {
    let prompt = build_breakdown_prompt(task_text);
    let request = CompletionRequest { model: model(), prompt, max_tokens: 1024 };

    match ctx.llm.complete(&request).await {
        Ok(response) => match parse_breakdown_response(&response.text) {
            Ok(drafts) => drafts,
            Err(error) => {
                tracing::warn!(%error, "discarding malformed breakdown response");
                Vec::new()
            }
        },
        Err(error) => {
            tracing::warn!(%error, "breakdown request failed");
            Vec::new()
        }
    }
}

/// Asks the oracle for a priority/time/slot suggestion per task,
/// correlated by id.
///
/// Returns an empty vec when the oracle is unreachable or its response
/// does not parse.
pub async fn suggest_schedule(ctx: &ServiceContext, tasks: &[Task]) -> Vec<ScheduleSuggestion> {
    let prompt = build_schedule_prompt(tasks);
    let request = CompletionRequest { model: model(), prompt, max_tokens: 2048 };

    match ctx.llm.complete(&request).await {
        Ok(response) => match parse_schedule_response(&response.text) {
            Ok(suggestions) => suggestions,
            Err(error) => {
                tracing::warn!(%error, "discarding malformed schedule response");
                Vec::new()
            }
        },
        Err(error) => {
            tracing::warn!(%error, "schedule request failed");
            Vec::new()
        }
    }
}

/// Asks the oracle for a short productivity summary of the task list.
///
/// Returns `None` when the oracle is unreachable or answers with nothing.
pub async fn project_insights(ctx: &ServiceContext, tasks: &[Task]) -> Option<String> {
    let completed = tasks.iter().filter(|t| t.completed).count();
    let pending = tasks.len() - completed;
    let prompt = build_insights_prompt(tasks, completed, pending);
    let request = CompletionRequest { model: model(), prompt, max_tokens: 1024 };

    match ctx.llm.complete(&request).await {
        Ok(response) => {
            let text = response.text.trim();
            if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            }
        }
        Err(error) => {
            tracing::warn!(%error, "insights request failed");
            None
        }
    }
}

fn build_breakdown_prompt(task_text: &str) -> String {
    format!(
        "Break down this task into 3-5 actionable subtasks: \"{task_text}\". \
         For each subtask, provide a priority (low, medium, high) and a short \
         estimated time (e.g., \"15m\", \"1h\").\n\n\
         Respond with JSON only (no markdown fences):\n\
         {{\"subtasks\": [{{\"text\": \"...\", \"priority\": \"low|medium|high\", \
         \"estimatedTime\": \"...\"}}]}}"
    )
}

fn build_schedule_prompt(tasks: &[Task]) -> String {
    let mut prompt = String::from(
        "Analyze these tasks and suggest priority, estimated time, and a logical \
         time slot for each. Return the data mapped to the provided IDs.\n\nTasks:\n",
    );
    for task in tasks {
        let _ = writeln!(prompt, "ID: {}, Task: {}", task.id, task.text);
    }
    prompt.push_str(
        "\nRespond with a JSON array only (no markdown fences):\n\
         [{\"id\": \"...\", \"priority\": \"low|medium|high\", \
         \"estimatedTime\": \"...\", \"suggestedSlot\": \"...\"}]",
    );
    prompt
}

fn build_insights_prompt(tasks: &[Task], completed: usize, pending: usize) -> String {
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    let list = serde_json::to_string(&texts).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze this todo list: {list}.\n\
         Completed: {completed}, Pending: {pending}.\n\
         Provide a 2-sentence executive summary and one \"tip of the day\" \
         for productivity."
    )
}

/// Parses the breakdown response shape `{"subtasks": [...]}`.
fn parse_breakdown_response(response: &str) -> Result<Vec<SubtaskDraft>, String> {
    #[derive(Deserialize)]
    struct BreakdownResponse {
        #[serde(default)]
        subtasks: Vec<DraftItem>,
    }

    #[derive(Deserialize)]
    struct DraftItem {
        text: String,
        priority: String,
        #[serde(rename = "estimatedTime")]
        estimated_time: String,
    }

    let body = strip_code_fences(response);
    let parsed: BreakdownResponse =
        serde_json::from_str(body).map_err(|e| format!("parse breakdown response: {e}"))?;

    Ok(parsed
        .subtasks
        .into_iter()
        .map(|item| SubtaskDraft {
            text: item.text,
            priority: Priority::from_label(&item.priority).unwrap_or_default(),
            estimated_time: item.estimated_time,
        })
        .collect())
}

/// Parses the schedule response shape `[{id, priority, estimatedTime, suggestedSlot}]`.
fn parse_schedule_response(response: &str) -> Result<Vec<ScheduleSuggestion>, String> {
    #[derive(Deserialize)]
    struct SuggestionItem {
        id: String,
        priority: String,
        #[serde(rename = "estimatedTime")]
        estimated_time: String,
        #[serde(rename = "suggestedSlot")]
        suggested_slot: String,
    }

    let body = strip_code_fences(response);
    let parsed: Vec<SuggestionItem> =
        serde_json::from_str(body).map_err(|e| format!("parse schedule response: {e}"))?;

    Ok(parsed
        .into_iter()
        .map(|item| ScheduleSuggestion {
            id: item.id,
            priority: Priority::from_label(&item.priority).unwrap_or_default(),
            estimated_time: item.estimated_time,
            suggested_slot: item.suggested_slot,
        })
        .collect())
}

/// Strips a surrounding markdown code fence, if the model added one anyway.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
