//! Background thread that runs blocking assistant calls off the UI thread

use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tracing::{debug, error, info};

use crate::assistant::{ChatMessage, GeneratedImage, ImageSize, TheoryAssistant};
use crate::error::{AssistantError, Result};

/// Work queued for the assistant thread
#[derive(Debug, Clone)]
pub enum AssistantRequest {
    Ask { history: Vec<ChatMessage> },
    GenerateImage { prompt: String, size: ImageSize },
}

/// Completed work, polled by the UI
#[derive(Debug)]
pub enum AssistantReply {
    Answer(Result<Option<String>>),
    Image(Result<Option<GeneratedImage>>),
}

/// Owns the assistant thread. Dropping it closes the request channel,
/// which lets the thread finish its current call and exit.
pub struct AssistantWorker {
    request_tx: Sender<AssistantRequest>,
    reply_rx: Receiver<AssistantReply>,
}

impl AssistantWorker {
    pub fn spawn<A>(assistant: A) -> Self
    where
        A: TheoryAssistant + Send + 'static,
    {
        let (request_tx, request_rx) = unbounded::<AssistantRequest>();
        let (reply_tx, reply_rx) = unbounded::<AssistantReply>();

        let spawned = thread::Builder::new()
            .name("harmonia-assistant".into())
            .spawn(move || Self::run(assistant, request_rx, reply_tx));
        match spawned {
            Ok(_) => info!("Assistant worker started"),
            // Requests will report WorkerGone
            Err(e) => error!("Failed to spawn assistant worker: {}", e),
        }

        Self { request_tx, reply_rx }
    }

    fn run<A: TheoryAssistant>(
        assistant: A,
        requests: Receiver<AssistantRequest>,
        replies: Sender<AssistantReply>,
    ) {
        for request in requests {
            let reply = match request {
                AssistantRequest::Ask { history } => {
                    debug!(turns = history.len(), "Handling chat request");
                    AssistantReply::Answer(assistant.ask(&history))
                }
                AssistantRequest::GenerateImage { prompt, size } => {
                    debug!(%size, "Handling image request");
                    AssistantReply::Image(assistant.generate_image(&prompt, size))
                }
            };
            if replies.send(reply).is_err() {
                break;
            }
        }
        info!("Assistant worker stopped");
    }

    pub fn submit(&self, request: AssistantRequest) -> Result<()> {
        self.request_tx
            .send(request)
            .map_err(|_| AssistantError::WorkerGone)
    }

    /// Next finished reply, if any. Never blocks.
    pub fn try_recv(&self) -> Option<Result<AssistantReply>> {
        match self.reply_rx.try_recv() {
            Ok(reply) => Some(Ok(reply)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AssistantError::WorkerGone)),
        }
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<AssistantReply> {
        self.reply_rx.recv_timeout(timeout).ok()
    }
}
