use bson::DateTime as BsonDateTime;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as it is stored in the `blogs` collection.
///
/// The collection carries no schema: apart from `_id`, fields may be absent
/// or hold any BSON type on documents written by other clients, and fields
/// this service does not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Bson>,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Bson>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Fields written by an insert. The identifier is assigned by the store.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlogPost {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Bson>,
}

impl NewBlogPost {
    pub fn new(title: String, body: String, author: Option<Bson>) -> Self {
        Self {
            title,
            body,
            author,
        }
    }

    pub fn into_post(self, id: ObjectId) -> BlogPost {
        BlogPost {
            id,
            title: Some(Bson::String(self.title)),
            body: Some(Bson::String(self.body)),
            author: self.author,
            updated_at: None,
            extra: Document::new(),
        }
    }
}

/// Full replacement of the editable fields, stamped with the update time.
#[derive(Debug, Clone)]
pub struct BlogPostChanges {
    pub title: String,
    pub body: String,
    pub author: Option<Bson>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostChanges {
    pub fn new(title: String, body: String, author: Option<Bson>) -> Self {
        Self {
            title,
            body,
            author,
            updated_at: Utc::now(),
        }
    }

    pub fn apply_to(&self, post: &mut BlogPost) {
        post.title = Some(Bson::String(self.title.clone()));
        post.body = Some(Bson::String(self.body.clone()));
        post.author = self.author.clone();
        post.updated_at = Some(Bson::DateTime(BsonDateTime::from_chrono(self.updated_at)));
    }
}
