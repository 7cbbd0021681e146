use crate::domain::blog::BlogPost;
use bson::Bson;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body accepted by create and update. Fields are left untyped: presence
/// and type of `title`/`body` are checked by the service, `author` is stored
/// as sent, and unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct BlogPostRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.title.map(to_json),
            body: post.body.map(to_json),
            author: post.author.map(to_json),
            updated_at: post.updated_at.map(to_json),
            extra: post
                .extra
                .into_iter()
                .map(|(key, value)| (key, to_json(value)))
                .collect(),
        }
    }
}

/// Renders ids as hex and dates as ISO-8601 strings; everything else uses
/// relaxed extended JSON.
fn to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(at) => {
            Value::String(at.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
