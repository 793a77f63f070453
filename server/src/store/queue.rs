//! Fire-and-forget command queue between row saves and the store.

use std::sync::Arc;

use roster_engine::{Command, CommitSink, Skill};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::SkillStore;

/// Sender half of the command queue.
pub type CommandSender = mpsc::UnboundedSender<Command<Skill>>;

/// Queue of committed row commands.
///
/// Sending never awaits; the worker applies commands in the order they
/// were sent.
#[derive(Debug, Clone)]
pub struct CommandQueue {
    sender: CommandSender,
}

impl CommandQueue {
    /// Wrap an existing sender.
    pub fn new(sender: CommandSender) -> Self {
        Self { sender }
    }
}

impl CommitSink<Skill> for CommandQueue {
    fn send(&self, command: Command<Skill>) {
        let kind = command.kind();
        if self.sender.send(command).is_err() {
            tracing::error!(kind, "Command queue closed, dropping command");
        } else {
            tracing::debug!(kind, "Command queued");
        }
    }
}

/// Spawn the worker that drains the queue into the store.
///
/// The worker stops once every `CommandQueue` clone has been dropped.
pub fn spawn_command_worker(store: Arc<SkillStore>) -> (CommandQueue, JoinHandle<()>) {
    let (sender, mut receiver) = mpsc::unbounded_channel::<Command<Skill>>();

    let handle = tokio::spawn(async move {
        while let Some(command) = receiver.recv().await {
            let kind = command.kind();
            let id = command.entity().id;
            match store.apply(command) {
                Ok(()) => tracing::info!(kind, ?id, "Command applied"),
                Err(e) => tracing::warn!(kind, ?id, error = %e, "Command rejected by store"),
            }
        }
        tracing::debug!("Command worker stopped");
    });

    (CommandQueue::new(sender), handle)
}
