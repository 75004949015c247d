use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageKind, MessageText, PhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    from: SenderId,
    to: PhoneNumber,
    message: MessageText,
    kind: MessageKind,
}

impl SendMessage {
    pub fn new(from: SenderId, to: PhoneNumber, message: MessageText, kind: MessageKind) -> Self {
        Self {
            from,
            to,
            message,
            kind,
        }
    }

    /// Validate raw inputs in wire order (`from`, `to`, `message`) and build a request.
    pub fn parse(
        from: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
        kind: MessageKind,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            SenderId::new(from)?,
            PhoneNumber::new(to)?,
            MessageText::new(message)?,
            kind,
        ))
    }

    pub fn regular(from: SenderId, to: PhoneNumber, message: MessageText) -> Self {
        Self::new(from, to, message, MessageKind::Regular)
    }

    pub fn flash(from: SenderId, to: PhoneNumber, message: MessageText) -> Self {
        Self::new(from, to, message, MessageKind::Flash)
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn recipient(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }
}
