use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be owned by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The store-assigned id, or `None` if the record was never persisted.
    fn id(&self) -> Option<&Self::Id>;

    /// Called exactly once, when the store inserts the record.
    fn assign_id(&mut self, id: Self::Id);
}

/// Query predicate evaluated inside the actor.
pub type Filter<T> = fn(&T) -> bool;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Item not found: {0}")]
    UnknownId(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Persist {
        item: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns every record of one entity type. Requests are handled one at a time,
/// so each individual request is atomic with respect to the others.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    debug!(%id, "Processing get request");
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Persist { item, respond_to } => {
                    let _ = respond_to.send(self.handle_persist(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(%id, "Processing delete request");
                    let removed = self.store.remove(&id).is_some();
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self.store.values().filter(|&item| filter(item)).cloned().collect();
                    debug!(count = items.len(), "Processing list request");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn handle_persist(&mut self, mut item: T) -> Result<T, FrameworkError> {
        match item.id().cloned() {
            None => {
                let id = (self.next_id_fn)();
                item.assign_id(id.clone());
                debug!(%id, "Inserting new item");
                self.store.insert(id, item.clone());
                Ok(item)
            }
            Some(id) => match self.store.get_mut(&id) {
                Some(existing) => {
                    debug!(%id, "Overwriting item");
                    *existing = item.clone();
                    Ok(item)
                }
                None => Err(FrameworkError::UnknownId(id.to_string())),
            },
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn persist(&self, item: T) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Persist { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, filter: Filter<T>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { filter, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u64>,
        text: String,
        pinned: bool,
    }

    impl Entity for Note {
        type Id = u64;

        fn id(&self) -> Option<&u64> {
            self.id.as_ref()
        }

        fn assign_id(&mut self, id: u64) {
            self.id = Some(id);
        }
    }

    fn note(text: &str, pinned: bool) -> Note {
        Note { id: None, text: text.into(), pinned }
    }

    fn start() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_persist_assigns_ids_then_overwrites() {
        let client = start();

        let first = client.persist(note("a", false)).await.unwrap();
        let second = client.persist(note("a", false)).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let mut edited = first.clone();
        edited.text = "edited".into();
        let saved = client.persist(edited).await.unwrap();
        assert_eq!(saved.id, Some(1));

        let stored = client.get(1).await.unwrap().unwrap();
        assert_eq!(stored.text, "edited");
    }

    #[tokio::test]
    async fn test_persist_with_unknown_id_is_rejected() {
        let client = start();

        let mut ghost = note("ghost", false);
        ghost.id = Some(42);
        let result = client.persist(ghost).await;

        assert_eq!(result, Err(FrameworkError::UnknownId("42".to_string())));
        assert_eq!(client.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_filters_in_id_order_and_delete_reports_removal() {
        let client = start();
        client.persist(note("one", true)).await.unwrap();
        client.persist(note("two", false)).await.unwrap();
        client.persist(note("three", true)).await.unwrap();

        let pinned = client.list(|n| n.pinned).await.unwrap();
        let texts: Vec<_> = pinned.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["one", "three"]);

        assert!(client.delete(1).await.unwrap());
        assert!(!client.delete(1).await.unwrap());
        assert_eq!(client.list(|n| n.pinned).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_communication_error() {
        let (actor, client) = ResourceActor::<Note>::new(1, || 1);
        drop(actor);

        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
