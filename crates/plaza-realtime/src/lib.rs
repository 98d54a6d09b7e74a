//! # plaza-realtime
//!
//! Single-node realtime fan-out. Domain events enter through the
//! [`plaza_core::traits::Notifier`] trait and reach every WebSocket
//! subscriber through a `tokio::sync::broadcast` channel.

pub mod hub;

pub use hub::EventHub;
