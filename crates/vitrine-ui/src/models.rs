//! Shared domain types for the storefront UI and the support console.
//!
//! # Design
//! - Plain data with serde derives so the types stay boundary-ready.
//! - Demo content is deterministic: fixed ids, fixed labels, no clocks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The shopper who opened the dialog.
    Customer,
    /// A member of staff replying from the console.
    Agent,
}

impl Speaker {
    /// Class suffix used by transcript bubbles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
        }
    }
}

/// Lifecycle state of a support dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogStatus {
    /// Awaiting or receiving replies.
    Open,
    /// Closed out by an agent; can be reopened.
    Resolved,
}

impl DialogStatus {
    /// Label shown on list pills and the transcript header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }
}

/// One message within a support dialog transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position of the message within its dialog, starting at 1.
    pub seq: u64,
    /// Message author.
    pub speaker: Speaker,
    /// Message body text.
    pub body: String,
    /// Display label for the send time (e.g. `"09:14"`).
    pub sent_at: String,
}

/// A customer support dialog managed from the admin console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Stable dialog identifier.
    pub id: Uuid,
    /// Customer display name.
    pub customer: String,
    /// Short subject line shown in the dialog list.
    pub subject: String,
    /// Current lifecycle state.
    pub status: DialogStatus,
    /// Customer messages not yet seen by an agent.
    pub unread: u32,
    /// Display label for the latest activity in the dialog.
    pub last_activity: String,
    /// Transcript in send order.
    pub messages: Vec<ChatMessage>,
}

impl Dialog {
    /// Most recent transcript message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Body of the most recent message, used as the list preview.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.last_message().map_or("", |message| &message.body)
    }

    /// Sequence number the next appended message should carry.
    #[must_use]
    pub fn next_seq(&self) -> u64 {
        self.last_message().map_or(1, |message| message.seq + 1)
    }
}

fn message(seq: u64, speaker: Speaker, body: &str, sent_at: &str) -> ChatMessage {
    ChatMessage {
        seq,
        speaker,
        body: body.to_string(),
        sent_at: sent_at.to_string(),
    }
}

/// Deterministic demo dialogs seeded into the store while no backend exists.
#[must_use]
pub fn demo_dialogs() -> Vec<Dialog> {
    vec![
        Dialog {
            id: Uuid::from_u128(0x6f5f_02aa_11d0_4c8e_9e1c_31b2_a6c0_0001),
            customer: "Maya K.".to_string(),
            subject: "Order #2481 still in transit?".to_string(),
            status: DialogStatus::Open,
            unread: 2,
            last_activity: "09:14".to_string(),
            messages: vec![
                message(
                    1,
                    Speaker::Customer,
                    "Hi! My order shipped a week ago and the tracking stopped updating.",
                    "08:52",
                ),
                message(
                    2,
                    Speaker::Agent,
                    "Checking with the carrier now, one moment.",
                    "08:57",
                ),
                message(
                    3,
                    Speaker::Customer,
                    "Thanks, the order number is 2481.",
                    "09:14",
                ),
            ],
        },
        Dialog {
            id: Uuid::from_u128(0x6f5f_02aa_11d0_4c8e_9e1c_31b2_a6c0_0002),
            customer: "Jonas B.".to_string(),
            subject: "Does the wool coat run small?".to_string(),
            status: DialogStatus::Open,
            unread: 1,
            last_activity: "08:41".to_string(),
            messages: vec![message(
                1,
                Speaker::Customer,
                "Thinking about the camel wool coat. Should I size up?",
                "08:41",
            )],
        },
        Dialog {
            id: Uuid::from_u128(0x6f5f_02aa_11d0_4c8e_9e1c_31b2_a6c0_0003),
            customer: "Ines R.".to_string(),
            subject: "Return label request".to_string(),
            status: DialogStatus::Resolved,
            unread: 0,
            last_activity: "yesterday".to_string(),
            messages: vec![
                message(
                    1,
                    Speaker::Customer,
                    "Could you send me a return label for the linen shirt?",
                    "yesterday",
                ),
                message(
                    2,
                    Speaker::Agent,
                    "Sent to your inbox. The pickup window is Mon-Fri.",
                    "yesterday",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_dialog_ids_are_unique() {
        let dialogs = demo_dialogs();
        let ids: HashSet<_> = dialogs.iter().map(|dialog| dialog.id).collect();
        assert_eq!(ids.len(), dialogs.len());
    }

    #[test]
    fn demo_transcripts_are_sequenced_from_one() {
        for dialog in demo_dialogs() {
            for (index, message) in dialog.messages.iter().enumerate() {
                assert_eq!(message.seq, index as u64 + 1, "dialog {}", dialog.customer);
            }
        }
    }

    #[test]
    fn preview_takes_the_latest_body() {
        let dialogs = demo_dialogs();
        let first = &dialogs[0];
        assert_eq!(first.preview(), "Thanks, the order number is 2481.");
        assert_eq!(first.next_seq(), 4);
    }
}
