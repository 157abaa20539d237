//! Resource Endpoints
//!
//! List/get/create/update/delete for every admin collection, generic over
//! the record type.

use std::hash::Hash;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::Value;

use leptos_listview::Listable;

use super::{envelope, ApiClient, Method, RequestBody, RequestOptions};
use crate::error::{ApiError, ApiResult};
use crate::forms::{CategoryForm, CompanyForm, JobForm, MentorForm, SkillForm, TeamMemberForm};
use crate::models::{Category, Company, Job, Mentor, Skill, TeamMember};

/// Add/edit form for a record type
pub trait RecordForm: Clone + Default + PartialEq + Send + Sync + 'static {
    type Record;

    /// Pre-filled form for editing
    fn from_record(record: &Self::Record) -> Self;

    /// Labels of required fields that are still empty
    fn missing_fields(&self) -> Vec<&'static str>;

    fn to_body(&self) -> ApiResult<RequestBody>;

    /// Message to show instead of submitting, if any
    fn validate(&self) -> Result<(), String> {
        match self.missing_fields().as_slice() {
            [] => Ok(()),
            [one] => Err(format!("{} is required", one)),
            many => Err(format!("{} are required", many.join(", "))),
        }
    }
}

/// A collection exposed by the API
pub trait Resource: DeserializeOwned + Listable + Clone + Eq + Hash + Send + Sync + 'static {
    /// Collection path, e.g. `/categories`
    const PATH: &'static str;
    /// Wrapper fields a list response may use, highest priority first
    const LIST_FIELDS: &'static [&'static str];
    /// Wrapper fields a single-record response may use
    const RECORD_FIELDS: &'static [&'static str];
    /// Singular noun for messages
    const NOUN: &'static str;

    type Form: RecordForm<Record = Self>;

    fn id(&self) -> &str;
}

/// Characters escaped in an id path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn item_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::PATH, utf8_percent_encode(id, SEGMENT_ENCODE_SET))
}

// ========================
// Operations
// ========================

/// Whole collection. Rows that do not decode are skipped.
pub async fn list<R: Resource>(client: &ApiClient) -> ApiResult<Vec<R>> {
    let value: Value = client.fetch_json(R::PATH, RequestOptions::get()).await?;
    let rows = envelope::collection(value, R::LIST_FIELDS);
    let total = rows.len();
    let records: Vec<R> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[api] skipping malformed {}: {}", R::NOUN, e);
                None
            }
        })
        .collect();
    log::debug!("[api] loaded {}/{} {} rows", records.len(), total, R::NOUN);
    Ok(records)
}

/// One record by id. `Ok(None)` when the API says it does not exist.
pub async fn get<R: Resource>(client: &ApiClient, id: &str) -> ApiResult<Option<R>> {
    let value = match client.fetch_json::<Value>(&item_path::<R>(id), RequestOptions::get()).await {
        Ok(value) => value,
        Err(ApiError::NotFound) => return Ok(None),
        Err(e) => return Err(e),
    };
    envelope::record(value, R::RECORD_FIELDS)
        .map(|record| serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}

/// POST the form. Returns the stored record when the API sends it back.
pub async fn create<R: Resource>(client: &ApiClient, form: &R::Form) -> ApiResult<Option<R>> {
    let options = RequestOptions::new(Method::Post).with_body(form.to_body()?);
    let response = client.call(R::PATH, options).await?;
    Ok(returned_record(response.json_opt()?))
}

/// PUT the form over record `id`
pub async fn update<R: Resource>(client: &ApiClient, id: &str, form: &R::Form) -> ApiResult<Option<R>> {
    let options = RequestOptions::new(Method::Put).with_body(form.to_body()?);
    let response = client.call(&item_path::<R>(id), options).await?;
    Ok(returned_record(response.json_opt()?))
}

pub async fn delete<R: Resource>(client: &ApiClient, id: &str) -> ApiResult<()> {
    client
        .call(&item_path::<R>(id), RequestOptions::delete())
        .await?
        .error_for_status()
        .map(|_| ())
}

fn returned_record<R: Resource>(value: Option<Value>) -> Option<R> {
    let record = envelope::record(value?, R::RECORD_FIELDS)?;
    serde_json::from_value(record).ok()
}

// ========================
// Collections
// ========================

impl Resource for Category {
    const PATH: &'static str = "/categories";
    const LIST_FIELDS: &'static [&'static str] = &["categories", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["category", "data"];
    const NOUN: &'static str = "category";
    type Form = CategoryForm;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Company {
    const PATH: &'static str = "/companies";
    const LIST_FIELDS: &'static [&'static str] = &["companies", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["company", "data"];
    const NOUN: &'static str = "company";
    type Form = CompanyForm;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Job {
    const PATH: &'static str = "/jobs";
    const LIST_FIELDS: &'static [&'static str] = &["jobs", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["job", "data"];
    const NOUN: &'static str = "job";
    type Form = JobForm;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Mentor {
    const PATH: &'static str = "/mentors";
    const LIST_FIELDS: &'static [&'static str] = &["mentors", "mentorProfiles", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["mentor", "mentorProfile", "data"];
    const NOUN: &'static str = "mentor";
    type Form = MentorForm;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Skill {
    const PATH: &'static str = "/skills";
    const LIST_FIELDS: &'static [&'static str] = &["skills", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["skill", "data"];
    const NOUN: &'static str = "skill";
    type Form = SkillForm;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for TeamMember {
    const PATH: &'static str = "/team";
    const LIST_FIELDS: &'static [&'static str] = &["team", "members", "data"];
    const RECORD_FIELDS: &'static [&'static str] = &["member", "data"];
    const NOUN: &'static str = "team member";
    type Form = TeamMemberForm;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{signed_in, ScriptedTransport};
    use std::sync::Arc;

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(item_path::<Job>("abc123"), "/jobs/abc123");
        assert_eq!(item_path::<Job>("a/b c"), "/jobs/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_list_unwraps_and_skips_bad_rows() {
        let body = r#"{"success": true, "mentors": [
            {"_id": "m1", "name": "Ada", "email": "ada@example.com", "expertise": "Backend"},
            {"_id": "m2"},
            {"_id": "m3", "name": "Lin", "experience": 7}
        ]}"#;
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Get, "/mentors", 200, body));
        let client = signed_in(transport);

        let mentors = list::<Mentor>(&client).await.unwrap();
        let ids: Vec<&str> = mentors.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
        assert_eq!(mentors[1].experience, Some(7));
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Get, "/skills", 503, "busy"));
        let client = signed_in(transport);

        let err = list::<Skill>(&client).await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 503, message: "busy".to_string() });
    }

    #[tokio::test]
    async fn test_get_distinguishes_missing() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Get, "/jobs/j1", 200, r#"{"job": {"_id": "j1", "title": "Intern"}}"#)
                .respond(Method::Get, "/jobs/empty", 200, r#"{"message": "no such job"}"#),
        );
        let client = signed_in(transport);

        let job = get::<Job>(&client, "j1").await.unwrap().unwrap();
        assert_eq!(job.title, "Intern");
        assert_eq!(get::<Job>(&client, "gone").await, Ok(None));
        assert_eq!(get::<Job>(&client, "empty").await, Ok(None));
    }

    #[tokio::test]
    async fn test_create_and_update_send_form_json() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Post, "/skills", 201, r#"{"skill": {"_id": "s9", "name": "Rust"}}"#)
                .respond(Method::Put, "/skills/s9", 204, ""),
        );
        let client = signed_in(transport.clone());
        let form = SkillForm { name: "Rust".to_string(), category: "Languages".to_string() };

        let created = create::<Skill>(&client, &form).await.unwrap();
        assert_eq!(created.map(|s| s.id), Some("s9".to_string()));

        let updated = update::<Skill>(&client, "s9", &form).await.unwrap();
        assert_eq!(updated, None);

        let sent = transport.sent();
        let body: Value = match &sent[0].body {
            RequestBody::Json(text) => serde_json::from_str(text).unwrap(),
            other => panic!("expected json body, got {:?}", other),
        };
        assert_eq!(body["name"], "Rust");
        assert_eq!(sent[1].url, "http://api.test/skills/s9");
    }

    #[tokio::test]
    async fn test_plain_text_success_is_not_an_error() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Post, "/skills", 201, "Created")
                .respond(Method::Put, "/skills/s9", 200, "OK"),
        );
        let client = signed_in(transport.clone());
        let form = SkillForm { name: "Rust".to_string(), category: String::new() };

        assert_eq!(create::<Skill>(&client, &form).await, Ok(None));
        assert_eq!(update::<Skill>(&client, "s9", &form).await, Ok(None));
        assert_eq!(transport.count(Method::Post), 1);
    }

    #[tokio::test]
    async fn test_delete_is_a_single_request() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Delete, "/categories/x", 200, r#"{"message": "deleted"}"#)
                .respond(Method::Delete, "/categories/locked", 409, r#"{"error": "in use"}"#),
        );
        let client = signed_in(transport.clone());

        assert_eq!(delete::<Category>(&client, "x").await, Ok(()));
        assert_eq!(transport.count(Method::Delete), 1);
        assert_eq!(transport.count(Method::Get), 0);

        let err = delete::<Category>(&client, "locked").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 409, message: "in use".to_string() });
    }
}
