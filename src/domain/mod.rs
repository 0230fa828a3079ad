//! Domain layer: chat records and list state.

pub mod chat;
pub mod chat_list_state;
pub mod demo;
