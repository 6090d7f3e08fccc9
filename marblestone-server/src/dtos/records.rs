//! Mapping between stored BSON documents and the JSON the REST clients
//! have always received: `ObjectId` as the 24-char hex string, datetimes
//! as RFC 3339 strings, everything else as plain JSON.

use mongodb::bson::{Bson, Document};
use serde_json::{json, Value};

pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Insert acknowledgment in the wire shape clients already parse.
pub fn insert_ack(inserted_id: &Bson) -> Value {
    let inserted_id = match inserted_id {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => bson_to_json(other.clone()),
    };
    json!({ "acknowledged": true, "insertedId": inserted_id })
}

pub fn delete_ack(deleted_count: u64) -> Value {
    json!({ "acknowledged": true, "deletedCount": deleted_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn object_id_renders_as_hex_string() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "title": "Lakeside villa", "price": 420000 };

        let value = document_to_json(document);

        assert_eq!(value["_id"], Value::String(oid.to_hex()));
        assert_eq!(value["title"], "Lakeside villa");
        assert_eq!(value["price"], 420000);
    }

    #[test]
    fn nested_documents_and_arrays_are_converted() {
        let oid = ObjectId::new();
        let document = doc! {
            "agent": { "ref": oid },
            "tags": ["garden", { "inner": oid }]
        };

        let value = document_to_json(document);

        assert_eq!(value["agent"]["ref"], Value::String(oid.to_hex()));
        assert_eq!(value["tags"][0], "garden");
        assert_eq!(value["tags"][1]["inner"], Value::String(oid.to_hex()));
    }

    #[test]
    fn insert_ack_carries_the_hex_id() {
        let oid = ObjectId::new();
        let ack = insert_ack(&Bson::ObjectId(oid));

        assert_eq!(ack["acknowledged"], true);
        assert_eq!(ack["insertedId"], Value::String(oid.to_hex()));
    }

    #[test]
    fn delete_ack_reports_the_count() {
        let ack = delete_ack(2);
        assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 2 }));
    }
}
