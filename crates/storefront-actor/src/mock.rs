//! # Mock Clients
//!
//! Test doubles for [`ResourceClient`]. Two styles are offered:
//!
//! - [`MockClient`]: queue the replies up front (`expect_action(id).return_ok(..)`),
//!   hand `mock.client()` to the code under test, then call [`MockClient::verify`].
//! - [`create_mock_client`] plus the `expect_*` helpers: drive the receiving end by
//!   hand and assert on the exact payload that arrived.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, replies are scripted | real store |
//! | Error injection | `return_err` | needs a crafted store |
//! | Use for | client wrappers, orchestration | entity rules, full system |
//!
//! ```rust
//! use storefront_actor::mock::MockClient;
//! use storefront_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Counter { id: u32, hits: u32 }
//! #[derive(Debug)] struct CounterCreate;
//! #[derive(Debug)] struct CounterUpdate;
//! #[derive(Debug)] enum CounterAction { Hit }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32; type Create = CounterCreate; type Update = CounterUpdate;
//!     type Action = CounterAction; type ActionResult = u32; type Context = ();
//!     type Error = CounterError;
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, hits: 0 })
//!     }
//!     async fn on_update(&mut self, _: CounterUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
//!         self.hits += 1;
//!         Ok(self.hits)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_action(7).return_ok(3);
//!     mock.expect_action(7).return_err(FrameworkError::NotFound("7".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(7, CounterAction::Hit).await.unwrap(), 3);
//!     assert!(client.perform_action(7, CounterAction::Hit).await.is_err());
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A scripted reply, matched against the next incoming request.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

/// A client whose replies come from a queue of expectations.
///
/// Requests that do not match the next expectation (wrong kind or wrong id) are
/// answered with [`FrameworkError::ActorDropped`] and reported by
/// [`verify`](Self::verify).
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Spawns the responder task. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script = Arc::new(Mutex::new(Script {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let responder = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut script = match responder.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let expectation = script.expectations.pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        script
                            .failures
                            .push(format!("unexpected request: {}", describe(&request)));
                        reject(request);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            script: self.script.clone(),
            make: Box::new(make),
        }
    }

    /// Panics if an expectation was left unused or a request did not match.
    pub fn verify(&self) {
        let script = match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !script.failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", script.failures);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("Get {id}"),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Update { id, update, .. } => format!("Update {id} {update:?}"),
        ResourceRequest::Delete { id, .. } => format!("Delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("Action {id} {action:?}"),
    }
}

fn reject<T: ActorEntity>(request: ResourceRequest<T>) {
    match request {
        ResourceRequest::Create { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Get { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::List { respond_to } => drop_reply(respond_to),
        ResourceRequest::Update { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Delete { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Action { respond_to, .. } => drop_reply(respond_to),
    }
}

fn drop_reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>) {
    let _ = respond_to.send(Err(FrameworkError::ActorDropped));
}

/// Finishes an expectation with either a value or an error.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    script: SharedScript<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        let mut script = match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        script.expectations.push_back(expectation);
    }
}

/// A client plus the raw receiver, for tests that inspect payloads themselves.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}
