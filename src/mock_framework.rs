//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without running
//! a real [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Use [`create_mock_client`] to get a client and a receiver. The test then pops
//! requests off the receiver with helpers like [`expect_get`] or [`expect_persist`],
//! asserts on what was asked, and answers through the returned responder. Nothing
//! answers unless the test does, so the order in which a caller issues requests
//! is directly observable.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::framework::{Entity, Filter, FrameworkError, ResourceClient, ResourceRequest};

type Responder<T> = tokio::sync::oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Persist request
pub async fn expect_persist<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Persist { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Lets the caller's task run, then asserts it has not sent anything else.
pub async fn expect_silence<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    match receiver.try_recv() {
        Err(TryRecvError::Empty) => {}
        Ok(request) => panic!("Unexpected request: {:?}", request),
        Err(TryRecvError::Disconnected) => panic!("Client was dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductId};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let persist_task = tokio::spawn(async move {
            let product = Product::new("Test", "", Decimal::new(1, 0), 1);
            client.persist(product).await
        });

        let (item, responder) = expect_persist(&mut receiver).await.expect("Expected Persist request");
        assert_eq!(item.name, "Test");
        let mut stored = item.clone();
        stored.id = Some(ProductId(1));
        responder.send(Ok(stored.clone())).unwrap();

        let result = persist_task.await.unwrap();
        assert_eq!(result, Ok(stored));
    }
}
