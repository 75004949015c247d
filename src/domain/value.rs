use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Wittyflow application id (`app_id`).
///
/// Invariant: non-empty after trimming.
pub struct AppId(String);

impl AppId {
    /// Wire field name used by Wittyflow (`app_id`).
    pub const FIELD: &'static str = "app_id";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Wittyflow application secret (`app_secret`).
///
/// Invariant: not blank. The value is kept exactly as provided and is redacted
/// from `Debug` output.
pub struct AppSecret(String);

impl AppSecret {
    /// Wire field name used by Wittyflow (`app_secret`).
    pub const FIELD: &'static str = "app_secret";

    /// Create a validated [`AppSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The credential pair attached to every Wittyflow request.
pub struct Credentials {
    app_id: AppId,
    app_secret: AppSecret,
}

impl Credentials {
    /// Validate both parts; the id is checked first.
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            app_id: AppId::new(app_id)?,
            app_secret: AppSecret::new(app_secret)?,
        })
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    pub fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown to the recipient (`from`).
///
/// Invariant: non-empty after trimming and at most [`SenderId::MAX_CHARS`] characters.
pub struct SenderId(String);

impl SenderId {
    /// Wire field name used by Wittyflow (`from`).
    pub const FIELD: &'static str = "from";

    /// Longest sender id accepted by Wittyflow.
    pub const MAX_CHARS: usize = 14;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        check_max_chars(Self::FIELD, trimmed, Self::MAX_CHARS)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: non-empty after trimming and at most [`MessageText::MAX_CHARS`]
/// characters. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by Wittyflow (`message`).
    pub const FIELD: &'static str = "message";

    /// Longest message body accepted by Wittyflow.
    pub const MAX_CHARS: usize = 180;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        check_max_chars(Self::FIELD, &value, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Ghana mobile number in local format (`0` + network digit `2`..=`5` + 8 digits).
///
/// The number is sent to Wittyflow in international form, see
/// [`PhoneNumber::international`].
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wire field name used by Wittyflow (`to`).
    pub const FIELD: &'static str = "to";

    /// Ghana country calling code.
    pub const COUNTRY_CODE: &'static str = "233";

    const LOCAL_LEN: usize = 10;

    /// Parse a local-format number such as `0244123456`. Surrounding whitespace is ignored.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !is_local_mobile(trimmed) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The number as given, e.g. `0244123456`.
    pub fn local(&self) -> &str {
        &self.0
    }

    /// The number with the trunk `0` replaced by `233`, e.g. `233244123456`.
    pub fn international(&self) -> String {
        format!("{}{}", Self::COUNTRY_CODE, &self.0[1..])
    }
}

fn is_local_mobile(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == PhoneNumber::LOCAL_LEN
        && bytes[0] == b'0'
        && (b'2'..=b'5').contains(&bytes[1])
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Wittyflow message id returned by `messages/send`.
///
/// Invariant: non-empty after trimming and not a dot segment (`.` or `..`), which URL
/// normalization would drop from the status path.
pub struct MessageId(String);

impl MessageId {
    /// Field name used in Wittyflow payloads (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if matches!(trimmed, "." | "..") {
            return Err(ValidationError::InvalidMessageId {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message kind (`type`).
pub enum MessageKind {
    /// Stored in the recipient's inbox.
    #[default]
    Regular,
    /// Displayed immediately on the recipient's screen.
    Flash,
}

impl MessageKind {
    /// Wire field name used by Wittyflow (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire value: `"1"` for regular messages, `"0"` for flash messages.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Regular => "1",
            Self::Flash => "0",
        }
    }
}

fn check_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
