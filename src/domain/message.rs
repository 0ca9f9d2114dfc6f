/// Author of a message. The demo has exactly two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    You,
    Bot,
}

impl Sender {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Bot => "Aria",
        }
    }
}

/// Delivery progress of an outgoing message.
///
/// The sequence is fixed: Sending -> Sent -> Delivered -> Read. Transitions
/// are driven by the simulation timeline, never by a real transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DeliveryStatus {
    #[default]
    Sending,
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    /// Glyph shown at the bubble footer.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sending => "\u{2026}",
            Self::Sent => "\u{2713}",
            Self::Delivered => "\u{2713}\u{2713}",
            Self::Read => "\u{2713}\u{2713}",
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
        }
    }
}

/// Kind of file attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
    Audio,
}

impl AttachmentKind {
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Image => "[Image]",
            Self::File => "[File]",
            Self::Audio => "[Audio]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
}

impl Attachment {
    pub fn new(kind: AttachmentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Display form, e.g. `[Image] sunset.png`.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.kind.display_label(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp_ms: i64,
    pub status: DeliveryStatus,
    pub attachment: Option<Attachment>,
}

impl Message {
    pub fn outgoing(id: u64, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id,
            sender: Sender::You,
            text: text.into(),
            timestamp_ms,
            status: DeliveryStatus::Sending,
            attachment: None,
        }
    }

    pub fn incoming(id: u64, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            text: text.into(),
            timestamp_ms,
            // Incoming messages carry no meaningful delivery state; Read keeps
            // them out of the pending set.
            status: DeliveryStatus::Read,
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn is_outgoing(&self) -> bool {
        self.sender == Sender::You
    }

    /// Advances the delivery status if `next` is strictly later in the fixed
    /// sequence. Stale or backward transitions are ignored.
    pub fn advance_status(&mut self, next: DeliveryStatus) -> bool {
        if next > self.status {
            self.status = next;
            true
        } else {
            false
        }
    }
}
