//! In-memory and scripted port implementations shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;
use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};

/// In-memory filesystem keyed by path.
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    /// Pre-populates a file, as if a previous run had written it.
    pub fn seed(self, path: &Path, contents: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        self
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The instant every `FixedClock` in the tests points at.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
}

/// Generates `id-1`, `id-2`, ... in sequence.
pub struct SeqIdGenerator {
    counter: AtomicU64,
}

impl SeqIdGenerator {
    pub fn new() -> Self {
        Self { counter: AtomicU64::new(0) }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{n}")
    }
}

/// Serves a scripted sequence of completion results and records prompts.
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLlm {
    /// Scripted client answering each call with the next result in order.
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self { responses: Mutex::new(responses.into()), prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Handle to the prompts recorded so far, for assertions.
    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl LlmClient for ScriptedLlm {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("scripted llm exhausted".to_string()));
        Box::pin(async move {
            match next {
                Ok(text) => {
                    Ok(CompletionResponse { text, prompt_tokens: 0, completion_tokens: 0 })
                }
                Err(msg) => Err(msg.into()),
            }
        })
    }
}

/// LLM stub for tests that must never reach the oracle.
pub struct UnreachableLlm;

impl LlmClient for UnreachableLlm {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        panic!("test issued an unexpected LLM call");
    }
}

/// Context with an in-memory filesystem, fixed clock, sequential IDs and
/// no oracle access.
pub fn test_context() -> ServiceContext {
    test_context_with_fs(MemFs::new())
}

/// Same as [`test_context`] but with a caller-prepared filesystem.
pub fn test_context_with_fs(fs: MemFs) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock(fixed_instant())),
        fs: Box::new(fs),
        id_gen: Box::new(SeqIdGenerator::new()),
        llm: Box::new(UnreachableLlm),
    }
}

/// Context whose LLM answers with the given scripted results.
pub fn test_context_with_llm(responses: Vec<Result<String, String>>) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock(fixed_instant())),
        fs: Box::new(MemFs::new()),
        id_gen: Box::new(SeqIdGenerator::new()),
        llm: Box::new(ScriptedLlm::new(responses)),
    }
}
