//! Shared test support utilities
//!
//! Provides a scripted `StubGenerator` implementing `TextGenerator` for use in
//! unit and integration tests.

use crate::port::{GenerationError, TextGenerator};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted reaction of the stub.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Fail(GenerationError),
    /// Never resolves.
    Hang,
}

/// Generator that replays a script. The last reply repeats once the script
/// runs out.
pub struct StubGenerator {
    script: Mutex<VecDeque<StubReply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn scripted(replies: Vec<StubReply>) -> Self {
        assert!(!replies.is_empty(), "script needs at least one reply");
        Self {
            script: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::scripted(vec![StubReply::Text(text.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_reply(&self) -> StubReply {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap()
        }
    }
}

impl TextGenerator for StubGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.next_reply();
        Box::pin(async move {
            match reply {
                StubReply::Text(text) => Ok(text),
                StubReply::Fail(e) => Err(e),
                StubReply::Hang => std::future::pending().await,
            }
        })
    }
}
