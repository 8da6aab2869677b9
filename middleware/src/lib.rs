//! Store middleware: interceptors that observe [`chat_core::MessageStore`] calls through a
//! `store_chain::StoreChain` without touching the data model.

mod logging;

#[cfg(test)]
mod test;

pub use logging::LoggingMiddleware;
