//! Run a controller on a dedicated thread.
//!
//! Handlers must never interleave. When events come from several OS threads
//! (timer threads, a UI thread, an IPC reader), they are funnelled through a
//! channel into one thread that owns both the controller and its host.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::config::{FeatureId, Settings};
use crate::error::ActorError;
use crate::host::Host;
use crate::player::{Event, PlayerControlController};

enum Message {
    Event(Event),
    SetFeature(FeatureId, bool),
    Shutdown,
}

/// Cloneable handle for feeding events to a [`ControllerActor`].
#[derive(Clone)]
pub struct EventSender(Sender<Message>);

impl EventSender {
    pub fn send(&self, event: Event) -> Result<(), ActorError> {
        self.post(Message::Event(event))
    }

    /// Change a feature in the actor's registry.
    pub fn set_feature(&self, id: FeatureId, enabled: bool) -> Result<(), ActorError> {
        self.post(Message::SetFeature(id, enabled))
    }

    fn post(&self, message: Message) -> Result<(), ActorError> {
        self.0.send(message).map_err(|_| ActorError::Disconnected)
    }
}

/// A controller and its host, owned by one worker thread.
pub struct ControllerActor {
    sender: EventSender,
    handle: Option<JoinHandle<()>>,
}

impl ControllerActor {
    /// Start the worker.
    ///
    /// `make_host` runs on the worker thread and receives a sender so the
    /// host can report timers and DOM events back.
    pub fn spawn<H, F>(settings: Settings, make_host: F) -> Self
    where
        H: Host,
        F: FnOnce(EventSender) -> H + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let sender = EventSender(tx);
        let host_sender = sender.clone();

        let handle = thread::spawn(move || {
            let mut host = make_host(host_sender);
            let mut controller = PlayerControlController::new(settings);
            controller.attach(&mut host);
            worker_loop(rx, &mut controller, &mut host);
        });

        Self {
            sender,
            handle: Some(handle),
        }
    }

    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Process everything already queued, then stop and join the worker.
    pub fn shutdown(mut self) -> Result<(), ActorError> {
        self.sender.post(Message::Shutdown)?;
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| ActorError::Panicked),
            None => Ok(()),
        }
    }
}

impl Drop for ControllerActor {
    fn drop(&mut self) {
        if self.handle.is_some() {
            // Worker may already be gone
            let _ = self.sender.post(Message::Shutdown);
        }
    }
}

/// Handle messages until shutdown or until every sender is dropped.
fn worker_loop<H: Host>(
    rx: Receiver<Message>,
    controller: &mut PlayerControlController<Settings>,
    host: &mut H,
) {
    while let Ok(message) = rx.recv() {
        match message {
            Message::Event(event) => controller.handle(host, event),
            Message::SetFeature(id, enabled) => controller.set_feature(host, id, enabled),
            Message::Shutdown => break,
        }
    }
    tracing::debug!("controller actor stopped");
}
