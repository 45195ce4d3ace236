//! Wire types for the inventory web service.
//!
//! Every type here mirrors a complex type of the remote service schema:
//! a flat record with a fixed field order, optional markers and
//! repeated-element semantics. Struct declaration order is the wire
//! field order. Collection fields are plain `Vec`s initialized empty
//! at construction and defaulted to empty on deserialization; they are
//! never `Option<Vec<_>>`.
//!
//! Extension relationships of the schema (a record adding a couple of
//! fields to a base record) are modeled by embedding the base record
//! with `#[serde(flatten)]`. No polymorphic dispatch happens anywhere.

pub mod messages;
pub mod metadata;
pub mod objects;
pub mod pools;
pub mod session;
pub mod sync;
pub mod views;

pub use metadata::{RemoteAttributeMetadata, RemoteClassMetadata, RemoteClassMetadataLight};
pub use objects::{RemoteObject, RemoteObjectLight, StringPair};
pub use pools::{RemoteInventoryProxy, RemotePool};
pub use session::RemoteSession;
pub use sync::{
    RemoteBackgroundJob, RemoteSyncAction, RemoteSyncFinding, RemoteSyncResult,
    RemoteSynchronizationConfiguration, RemoteSynchronizationGroup, RemoteSynchronizationProvider,
};
pub use views::{RemoteViewObject, RemoteViewObjectLight};
