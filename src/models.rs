use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Incoming body of `POST /leads`.
///
/// Every field is optional. Non-string JSON values are kept as their JSON
/// text instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeadPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A stored row of the `leads` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Lead {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Product document forwarded to IdeaSoft untouched.
pub type ProductPayload = serde_json::Map<String, Value>;

/// `{"ok": true}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Upstream status and raw body, relayed as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishReply {
    pub status: u16,
    pub body: String,
}

/// Result of a handler that depends on optional configuration.
///
/// Both arms are served with HTTP 200; callers tell them apart by shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome<T> {
    Done(T),
    Misconfigured { error: String },
}

impl<T> Outcome<T> {
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Outcome::Misconfigured {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_lead_body_is_all_null() {
        let lead: LeadPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(lead, LeadPayload::default());
    }

    #[test]
    fn lead_fields_are_read_by_name() {
        let lead: LeadPayload = serde_json::from_value(json!({
            "name": "Ayşe",
            "email": "ayse@example.com",
            "phone": null,
            "note": "call after 5pm",
            "utm_source": "instagram"
        }))
        .unwrap();

        assert_eq!(lead.name.as_deref(), Some("Ayşe"));
        assert_eq!(lead.email.as_deref(), Some("ayse@example.com"));
        assert_eq!(lead.phone, None);
        assert_eq!(lead.note.as_deref(), Some("call after 5pm"));
    }

    #[test]
    fn non_string_values_become_text() {
        let lead: LeadPayload = serde_json::from_value(json!({
            "phone": 5551234567u64,
            "note": {"source": "fair"},
            "name": true
        }))
        .unwrap();

        assert_eq!(lead.phone.as_deref(), Some("5551234567"));
        assert_eq!(lead.note.as_deref(), Some(r#"{"source":"fair"}"#));
        assert_eq!(lead.name.as_deref(), Some("true"));
    }

    #[test]
    fn outcome_shapes() {
        let done = serde_json::to_value(Outcome::Done(Ack::ok())).unwrap();
        assert_eq!(done, json!({"ok": true}));

        let reply = Outcome::Done(PublishReply {
            status: 201,
            body: r#"{"id":1}"#.to_string(),
        });
        assert_eq!(
            serde_json::to_value(reply).unwrap(),
            json!({"status": 201, "body": "{\"id\":1}"})
        );

        let missing: Outcome<Ack> = Outcome::misconfigured("DATABASE_URL is not configured");
        assert_eq!(
            serde_json::to_value(missing).unwrap(),
            json!({"error": "DATABASE_URL is not configured"})
        );
    }
}
