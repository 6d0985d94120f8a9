/// Property-based tests using proptest
/// Lead bodies of any shape map field-for-field onto the stored values
use lead_publish_api::models::{LeadPayload, Outcome, PublishReply};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\PC{0,40}")
}

proptest! {
    #[test]
    fn every_field_combination_round_trips(
        name in optional_text(),
        email in optional_text(),
        phone in optional_text(),
        note in optional_text(),
        explicit_null in proptest::bool::ANY,
    ) {
        let mut body = Map::new();
        for (key, value) in [("name", &name), ("email", &email), ("phone", &phone), ("note", &note)] {
            match value {
                Some(text) => { body.insert(key.to_string(), json!(text)); }
                // Absent and null must mean the same thing
                None if explicit_null => { body.insert(key.to_string(), Value::Null); }
                None => {}
            }
        }

        let lead: LeadPayload = serde_json::from_value(Value::Object(body)).unwrap();
        prop_assert_eq!(lead, LeadPayload { name, email, phone, note });
    }

    #[test]
    fn numeric_fields_are_kept_as_text(phone in any::<i64>()) {
        let lead: LeadPayload = serde_json::from_value(json!({ "phone": phone })).unwrap();
        prop_assert_eq!(lead.phone, Some(phone.to_string()));
    }

    #[test]
    fn publish_reply_body_is_never_reinterpreted(status in 100u16..600, body in "\\PC*") {
        let value = serde_json::to_value(Outcome::Done(PublishReply {
            status,
            body: body.clone(),
        }))
        .unwrap();
        prop_assert_eq!(value, json!({ "status": status, "body": body }));
    }
}
