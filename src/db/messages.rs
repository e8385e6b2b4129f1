//! Messages.
//!
//! Message content is immutable once stored. The only mutation is the read
//! flag, flipped either one message at a time or in bulk for everything a
//! participant sent to the caller.

use crate::errors::Result;
use crate::models::Message;
use crate::store::{Store, collections, new_record_id};
use chrono::Utc;
use tracing::{debug, info, instrument};

/// Caller-supplied fields for a new message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub event_id: Option<String>,
    pub content: String,
    pub read: bool,
}

/// Stores a message and returns the stored record.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, input), fields(sender = %input.sender_id, receiver = %input.receiver_id))]
pub async fn create_message(store: &Store, input: NewMessage) -> Result<Message> {
    let message = Message {
        id: new_record_id(),
        sender_id: input.sender_id,
        receiver_id: input.receiver_id,
        event_id: input.event_id,
        content: input.content,
        read: input.read,
        created_at: Utc::now(),
    };
    store.insert(collections::MESSAGES, &message).await?;
    debug!(
        "Created message {} from {} to {}",
        message.id, message.sender_id, message.receiver_id
    );
    Ok(message)
}

/// Returns every message the user sent or received, newest first.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_user_messages(store: &Store, user_id: &str) -> Result<Vec<Message>> {
    let sent: Vec<Message> = store
        .get_by_index(collections::MESSAGES, "senderId", user_id)
        .await?;
    let received: Vec<Message> = store
        .get_by_index(collections::MESSAGES, "receiverId", user_id)
        .await?;
    let mut messages: Vec<Message> = sent.into_iter().chain(received).collect();
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(messages)
}

/// Returns the messages exchanged between the user and one other
/// participant, oldest first, ready for chat rendering.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_conversation_messages(
    store: &Store,
    user_id: &str,
    participant_id: &str,
) -> Result<Vec<Message>> {
    let sent: Vec<Message> = store
        .get_by_index(collections::MESSAGES, "senderId", user_id)
        .await?;
    let received: Vec<Message> = store
        .get_by_index(collections::MESSAGES, "senderId", participant_id)
        .await?;
    let mut messages: Vec<Message> = sent
        .into_iter()
        .filter(|m| m.receiver_id == participant_id)
        .chain(
            received
                .into_iter()
                .filter(|m| m.receiver_id == user_id),
        )
        .collect();
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(messages)
}

/// Flips one message's read flag. A missing id is a no-op.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn mark_message_read(store: &Store, id: &str) -> Result<()> {
    let message: Option<Message> = store.get_by_id(collections::MESSAGES, id).await?;
    if let Some(mut message) = message {
        message.read = true;
        store.upsert(collections::MESSAGES, &message).await?;
    }
    Ok(())
}

/// Marks every unread message from `participant_id` to `user_id` as read,
/// returning how many were updated. Messages the user sent are untouched.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn mark_conversation_read(
    store: &Store,
    user_id: &str,
    participant_id: &str,
) -> Result<usize> {
    let from_participant: Vec<Message> = store
        .get_by_index(collections::MESSAGES, "senderId", participant_id)
        .await?;
    let mut updated = 0;
    for mut message in from_participant {
        if message.receiver_id == user_id && !message.read {
            message.read = true;
            store.upsert(collections::MESSAGES, &message).await?;
            updated += 1;
        }
    }
    if updated > 0 {
        info!(
            "Marked {} messages from {} to {} as read",
            updated, participant_id, user_id
        );
    }
    Ok(updated)
}
