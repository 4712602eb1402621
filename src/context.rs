//! Service context bundling all port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::llm::LiveLlmClient;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;
use crate::ports::llm::LlmClient;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Fields are public
/// so tests can wire in in-memory or scripted implementations directly.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the persisted task blob.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for task and subtask identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// LLM client backing the oracle operations.
    pub llm: Box<dyn LlmClient>,
}

impl ServiceContext {
    /// Creates a live context: system clock, real disk, UUIDv4 IDs, and
    /// the Anthropic API client.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
            llm: Box::new(LiveLlmClient::new()),
        }
    }
}
