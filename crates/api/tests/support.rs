//! Shared fixtures for the command integration tests
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gamelog_infra::{InvokeError, Invoker};
use gamelog_lib::AppContext;
use serde_json::{json, Value};

/// Invoker answering from a per-operation script.
///
/// Responses for one operation form a queue consumed call by call; the
/// final response repeats once the queue is exhausted. Every call is
/// recorded with its argument record.
pub struct ScriptedInvoker {
    responses: Mutex<HashMap<String, VecDeque<Result<Value, String>>>>,
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedInvoker {
    pub fn new(script: Vec<(&str, Result<Value, String>)>) -> Self {
        let mut responses: HashMap<String, VecDeque<Result<Value, String>>> = HashMap::new();
        for (operation, outcome) in script {
            responses.entry(operation.to_string()).or_default().push_back(outcome);
        }
        Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
    }

    /// Argument records of every call to `operation`, in call order.
    pub fn calls_to(&self, operation: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == operation)
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Invoker for ScriptedInvoker {
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, InvokeError> {
        self.calls.lock().unwrap().push((operation.to_string(), args));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(operation)
            .ok_or_else(|| InvokeError::new(operation, "unscripted operation"))?;
        let outcome = if queue.len() > 1 {
            queue.pop_front().ok_or_else(|| InvokeError::new(operation, "unscripted operation"))?
        } else {
            queue
                .front()
                .cloned()
                .ok_or_else(|| InvokeError::new(operation, "unscripted operation"))?
        };
        outcome.map_err(|reason| InvokeError::new(operation, reason))
    }
}

/// Attached context with the dump check already completed, so only the
/// behavior under test stands between a command and its backend calls.
pub fn scripted_context(
    script: Vec<(&str, Result<Value, String>)>,
) -> (Arc<AppContext>, Arc<ScriptedInvoker>) {
    let (ctx, invoker) = scripted_context_with_pending_dump_check(script);
    ctx.session.mark_dump_check_completed();
    (ctx, invoker)
}

/// Attached context whose session has not run the dump check yet.
pub fn scripted_context_with_pending_dump_check(
    script: Vec<(&str, Result<Value, String>)>,
) -> (Arc<AppContext>, Arc<ScriptedInvoker>) {
    let invoker = Arc::new(ScriptedInvoker::new(script));
    let ctx = Arc::new(AppContext::new(Arc::clone(&invoker) as Arc<dyn Invoker>));
    (ctx, invoker)
}

/// Context for a host that is not attached; no call may reach the invoker.
pub fn detached_context() -> (Arc<AppContext>, Arc<ScriptedInvoker>) {
    let invoker = Arc::new(ScriptedInvoker::new(Vec::new()));
    let ctx = Arc::new(AppContext::detached(Arc::clone(&invoker) as Arc<dyn Invoker>));
    (ctx, invoker)
}

pub fn log_json(id: i64, game_id: i64) -> Value {
    json!({
        "id": id,
        "created_at": "2024-03-01 10:00:00",
        "updated_at": "2024-03-01 10:00:00",
        "game_id": game_id,
        "status": "played",
        "rating": 4,
        "notes": "",
        "started_on": "2024-02-01",
        "finished_on": "2024-03-01",
        "minutes_played": 130
    })
}

pub fn game_json(id: i64, similar: &[i64]) -> Value {
    json!({
        "id": id,
        "title": format!("Game {id}"),
        "cover_id": "co1rgi",
        "similar_games": if similar.is_empty() { Value::Null } else { json!(similar) },
        "category": 0,
        "total_rating": 80.0
    })
}

pub fn settings_json(is_first_run: bool) -> Value {
    json!({
        "username": "sam",
        "executable_paths": "/games;/steam",
        "process_monitoring": { "enabled": true, "directory_depth": 3 },
        "autostart": false,
        "is_first_run": is_first_run,
        "twitch_client_id": "id",
        "twitch_client_secret": "secret"
    })
}

pub fn stats_json(minutes: i64, played: i64, completed: i64) -> Value {
    json!({
        "total_minutes_played": minutes,
        "total_games_played": played,
        "total_games_completed": completed
    })
}
