//! Messaging module for the WhatsApp microservice
//!
//! The microservice owns the WhatsApp session. This crate only talks to its
//! HTTP API: readiness, code dispatch and number existence lookups.

pub mod whatsapp_client;


pub use whatsapp_client::WhatsAppGatewayClient;
