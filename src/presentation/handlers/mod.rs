mod chat;
mod health;

pub use chat::{
    delete_conversation_handler, list_conversations_handler, list_messages_handler,
    send_message_handler,
};
pub use health::health_handler;
