//! Conversation threads.
//!
//! A conversation is not stored anywhere: it is derived from the flat
//! messages collection by grouping on the other participant, then resolving
//! that participant's display identity through the vendor-profile-first
//! lookup chain.

use crate::db::{messages, users, vendors};
use crate::errors::Result;
use crate::models::{Message, UserRole};
use crate::store::Store;
use std::collections::HashMap;
use tracing::instrument;

/// How the other participant should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    Planner,
    Vendor,
}

/// One thread between the caller and another participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub participant_id: String,
    pub participant_name: String,
    pub participant_kind: ParticipantKind,
    /// The newest message in the thread, regardless of direction.
    pub last_message: Message,
    /// Messages addressed to the caller that are still unread.
    pub unread_count: usize,
}

/// Builds the caller's conversation list, most recently active first.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn user_conversations(store: &Store, user_id: &str) -> Result<Vec<Conversation>> {
    let all_messages = messages::get_user_messages(store, user_id).await?;

    // get_user_messages returns newest first, so each group stays
    // newest-first and its head is the thread's last message.
    let mut groups: HashMap<String, Vec<Message>> = HashMap::new();
    for message in all_messages {
        let other = if message.sender_id == user_id {
            message.receiver_id.clone()
        } else {
            message.sender_id.clone()
        };
        groups.entry(other).or_default().push(message);
    }

    let mut conversations = Vec::with_capacity(groups.len());
    for (participant_id, thread) in groups {
        let Some(last_message) = thread.first().cloned() else {
            continue;
        };
        let unread_count = thread
            .iter()
            .filter(|m| m.receiver_id == user_id && !m.read)
            .count();
        let (participant_name, participant_kind) =
            resolve_participant(store, &participant_id).await?;
        conversations.push(Conversation {
            participant_id,
            participant_name,
            participant_kind,
            last_message,
            unread_count,
        });
    }

    conversations.sort_by(|a, b| {
        b.last_message
            .created_at
            .cmp(&a.last_message.created_at)
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });
    Ok(conversations)
}

// A participant with a vendor profile shows as their business; otherwise
// the account name and role decide. An id with neither record renders
// as-is rather than erroring, since messages carry no integrity guarantee.
async fn resolve_participant(
    store: &Store,
    participant_id: &str,
) -> Result<(String, ParticipantKind)> {
    if let Some(vendor) = vendors::get_vendor_by_user(store, participant_id).await? {
        return Ok((vendor.business_name, ParticipantKind::Vendor));
    }
    if let Some(user) = users::get_user(store, participant_id).await? {
        let kind = match user.role {
            UserRole::Vendor => ParticipantKind::Vendor,
            UserRole::Planner => ParticipantKind::Planner,
        };
        return Ok((user.name, kind));
    }
    Ok((participant_id.to_string(), ParticipantKind::Planner))
}
