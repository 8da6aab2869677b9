//! # chat-core
//!
//! Core types and traits for the chat backend: [`Message`] and [`Quiz`] wire types, the
//! [`MessageStore`] trait, store [`Middleware`], the error taxonomy and tracing initialization.
//! No I/O; used by storage, store-chain, middleware and chat-server.

pub mod error;
pub mod logger;
pub mod store;
pub mod types;

pub use error::{ChatError, Result};
pub use logger::init_tracing;
pub use store::MessageStore;
pub use types::{AnswerResult, CallOutcome, Message, Middleware, Quiz, StoreCall, StoredQuiz};
