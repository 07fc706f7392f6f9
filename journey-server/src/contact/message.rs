//! Contact messages and the form-service payload.

use serde::{Deserialize, Serialize};

use super::error::ContactError;

/// A message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
    /// Hidden honeypot checkbox; real visitors never tick it.
    #[serde(default)]
    pub botcheck: Option<String>,
}

impl ContactMessage {
    /// Check required fields.
    ///
    /// Name and message must be non-blank and the email must look like an
    /// address. Phone is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: "name",
                reason: "is required",
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::Invalid {
                field: "email",
                reason: "is required",
            });
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(ContactError::Invalid {
                    field: "email",
                    reason: "must be an email address",
                });
            }
        }

        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: "message",
                reason: "is required",
            });
        }

        Ok(())
    }

    /// Whether the honeypot field was filled in.
    pub fn is_spam(&self) -> bool {
        self.botcheck.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// JSON body posted to the form service.
#[derive(Debug, Serialize)]
pub struct SubmitPayload<'a> {
    pub access_key: &'a str,
    pub subject: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

impl<'a> SubmitPayload<'a> {
    /// Build the payload for a message. Fields are trimmed.
    pub fn new(access_key: &'a str, subject: &'a str, msg: &'a ContactMessage) -> Self {
        Self {
            access_key,
            subject,
            name: msg.name.trim(),
            email: msg.email.trim(),
            phone: msg.phone.trim(),
            message: msg.message.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            message: "Is Kedarnath open in May?".into(),
            botcheck: None,
        }
    }

    fn invalid_field(msg: &ContactMessage) -> Option<&'static str> {
        match msg.validate() {
            Err(ContactError::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn valid_message() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn blank_name() {
        let msg = ContactMessage {
            name: "   ".into(),
            ..valid()
        };
        assert_eq!(invalid_field(&msg), Some("name"));
    }

    #[test]
    fn bad_email() {
        for email in ["", "asha", "@example.com", "asha@"] {
            let msg = ContactMessage {
                email: email.into(),
                ..valid()
            };
            assert_eq!(invalid_field(&msg), Some("email"), "email {email:?}");
        }
    }

    #[test]
    fn blank_message() {
        let msg = ContactMessage {
            message: "\n".into(),
            ..valid()
        };
        assert_eq!(invalid_field(&msg), Some("message"));
    }

    #[test]
    fn honeypot() {
        assert!(!valid().is_spam());
        let msg = ContactMessage {
            botcheck: Some(String::new()),
            ..valid()
        };
        assert!(!msg.is_spam());
        let msg = ContactMessage {
            botcheck: Some("on".into()),
            ..valid()
        };
        assert!(msg.is_spam());
    }

    #[test]
    fn payload_json() {
        let msg = ContactMessage {
            name: " Asha ".into(),
            phone: "+91 98765 43210".into(),
            ..valid()
        };
        let payload = SubmitPayload::new("key-123", "Hello", &msg);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["access_key"], "key-123");
        assert_eq!(value["subject"], "Hello");
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["email"], "asha@example.com");
        assert_eq!(value["phone"], "+91 98765 43210");
        assert_eq!(value["message"], "Is Kedarnath open in May?");
    }

    #[test]
    fn deserialize_form_without_optional_fields() {
        let msg: ContactMessage =
            serde_json::from_str(r#"{"name":"A","email":"a@b","message":"hi"}"#).unwrap();
        assert_eq!(msg.phone, "");
        assert!(msg.botcheck.is_none());
    }
}
