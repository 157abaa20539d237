//! Add/edit form state for each admin collection.
//!
//! Inputs bind to plain strings; bodies are built only on submit.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::api::{MultipartForm, RecordForm, RequestBody};
use crate::error::ApiResult;
use crate::models::{Category, Company, Job, Mentor, Reference, Skill, TeamMember};

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn reference_id(value: &Option<Reference>) -> String {
    value.as_ref().map(|r| r.id().to_string()).unwrap_or_default()
}

/// Trimmed value, or JSON null when empty
fn optional(value: &str) -> Value {
    match value.trim() {
        "" => Value::Null,
        v => Value::String(v.to_string()),
    }
}

fn null_if_blank<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    optional(value).serialize(serializer)
}

fn required(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| blank(value))
        .map(|(label, _)| *label)
        .collect()
}

// ========================
// Category
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    /// Parent category id, empty for a top-level category
    pub parent: String,
}

impl RecordForm for CategoryForm {
    type Record = Category;

    fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            parent: reference_id(&record.parent),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Name", self.name.as_str())])
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        RequestBody::json(&json!({
            "name": self.name.trim(),
            "parentId": optional(&self.parent),
        }))
    }
}

// ========================
// Company
// ========================

/// A file picked in the browser, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
    pub email: String,
    pub website: String,
    pub location: String,
    pub description: String,
    /// New logo; the current one is kept when absent
    pub logo: Option<Upload>,
}

impl CompanyForm {
    fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("website", self.website.trim()),
            ("location", self.location.trim()),
            ("description", self.description.trim()),
        ]
    }
}

impl RecordForm for CompanyForm {
    type Record = Company;

    fn from_record(record: &Company) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            website: text(&record.website),
            location: text(&record.location),
            description: text(&record.description),
            logo: None,
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Name", self.name.as_str()), ("Email", self.email.as_str())])
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        match &self.logo {
            Some(upload) => {
                let form = self
                    .text_fields()
                    .into_iter()
                    .filter(|(_, value)| !value.is_empty())
                    .fold(MultipartForm::default(), |form, (name, value)| form.text(name, value));
                let form = form.file("logo", &upload.file_name, &upload.content_type, upload.bytes.clone());
                Ok(RequestBody::Multipart(form))
            }
            None => {
                let body: Map<String, Value> = self
                    .text_fields()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), optional(value)))
                    .collect();
                RequestBody::json(&body)
            }
        }
    }
}

// ========================
// Job
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobForm {
    pub title: String,
    /// Company id
    pub company: String,
    /// Category id, sent as null when cleared
    #[serde(serialize_with = "null_if_blank")]
    pub category: String,
    pub location: String,
    #[serde(rename = "jobType")]
    pub job_type: String,
    /// Markdown
    pub description: String,
}

impl RecordForm for JobForm {
    type Record = Job;

    fn from_record(record: &Job) -> Self {
        Self {
            title: record.title.clone(),
            company: reference_id(&record.company),
            category: reference_id(&record.category),
            location: text(&record.location),
            job_type: text(&record.job_type),
            description: record.description.clone(),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Title", self.title.as_str()), ("Company", self.company.as_str())])
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        let trimmed = Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            category: self.category.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            description: self.description.clone(),
        };
        RequestBody::json(&trimmed)
    }
}

// ========================
// Mentor
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorForm {
    pub name: String,
    pub email: String,
    pub expertise: String,
    /// Years, as typed
    pub experience: String,
    pub company: String,
    pub bio: String,
}

impl MentorForm {
    fn years(&self) -> Result<Option<u32>, String> {
        match self.experience.trim() {
            "" => Ok(None),
            v => v
                .parse()
                .map(Some)
                .map_err(|_| "Experience must be a whole number of years".to_string()),
        }
    }
}

impl RecordForm for MentorForm {
    type Record = Mentor;

    fn from_record(record: &Mentor) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            expertise: text(&record.expertise),
            experience: record.experience.map(|y| y.to_string()).unwrap_or_default(),
            company: text(&record.company),
            bio: text(&record.bio),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Name", self.name.as_str()), ("Email", self.email.as_str())])
    }

    fn validate(&self) -> Result<(), String> {
        match self.missing_fields().as_slice() {
            [] => self.years().map(|_| ()),
            [one] => Err(format!("{} is required", one)),
            many => Err(format!("{} are required", many.join(", "))),
        }
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        RequestBody::json(&json!({
            "name": self.name.trim(),
            "email": self.email.trim(),
            "expertise": optional(&self.expertise),
            "experience": self.years().ok().flatten(),
            "company": optional(&self.company),
            "bio": optional(&self.bio),
        }))
    }
}

// ========================
// Skill
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
}

impl RecordForm for SkillForm {
    type Record = Skill;

    fn from_record(record: &Skill) -> Self {
        Self {
            name: record.name.clone(),
            category: text(&record.category),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Name", self.name.as_str())])
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        RequestBody::json(&json!({
            "name": self.name.trim(),
            "category": optional(&self.category),
        }))
    }
}

// ========================
// Team
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberForm {
    pub name: String,
    pub role: String,
    pub email: String,
    /// Photo URL
    pub photo: String,
}

impl RecordForm for TeamMemberForm {
    type Record = TeamMember;

    fn from_record(record: &TeamMember) -> Self {
        Self {
            name: record.name.clone(),
            role: record.role.clone(),
            email: record.email.clone(),
            photo: text(&record.photo),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        required(&[("Name", self.name.as_str()), ("Role", self.role.as_str())])
    }

    fn to_body(&self) -> ApiResult<RequestBody> {
        RequestBody::json(&json!({
            "name": self.name.trim(),
            "role": self.role.trim(),
            "email": optional(&self.email),
            "photo": optional(&self.photo),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FormValue;

    fn json_of(body: RequestBody) -> Value {
        match body {
            RequestBody::Json(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected json, got {:?}", other),
        }
    }

    #[test]
    fn test_required_fields() {
        let form = CompanyForm::default();
        assert_eq!(form.missing_fields(), vec!["Name", "Email"]);
        assert_eq!(form.validate(), Err("Name, Email are required".to_string()));

        let form = SkillForm { name: "  ".to_string(), ..Default::default() };
        assert_eq!(form.validate(), Err("Name is required".to_string()));

        let form = SkillForm { name: "Rust".to_string(), ..Default::default() };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_category_prefill_and_body() {
        let category = Category {
            id: "b".to_string(),
            name: "Web".to_string(),
            parent: Some(Reference::Populated { id: "a".to_string(), name: "Tech".to_string() }),
        };
        let form = CategoryForm::from_record(&category);
        assert_eq!(form.parent, "a");

        let body = json_of(form.to_body().unwrap());
        assert_eq!(body, json!({"name": "Web", "parentId": "a"}));

        let top = CategoryForm { name: "Tech ".to_string(), parent: String::new() };
        assert_eq!(json_of(top.to_body().unwrap()), json!({"name": "Tech", "parentId": null}));
    }

    #[test]
    fn test_job_edit_round_trips_ids() {
        let job = Job {
            id: "j1".to_string(),
            title: "Intern".to_string(),
            company: Some(Reference::Populated { id: "c1".to_string(), name: "Acme".to_string() }),
            category: None,
            location: Some("Remote".to_string()),
            job_type: Some("internship".to_string()),
            description: "**hi**".to_string(),
        };
        let form = JobForm::from_record(&job);
        assert_eq!(form.company, "c1");
        assert_eq!(form.validate(), Ok(()));

        let body = json_of(form.to_body().unwrap());
        assert_eq!(body["company"], "c1");
        assert_eq!(body["jobType"], "internship");
        assert_eq!(body["category"], Value::Null);
    }

    #[test]
    fn test_job_clearing_category_sends_null() {
        let mut form = JobForm {
            title: "Intern".to_string(),
            company: "c1".to_string(),
            category: "k1".to_string(),
            ..Default::default()
        };
        assert_eq!(json_of(form.to_body().unwrap())["category"], "k1");

        form.category = "  ".to_string();
        let body = json_of(form.to_body().unwrap());
        assert!(body.as_object().is_some_and(|o| o.contains_key("category")));
        assert_eq!(body["category"], Value::Null);
    }

    #[test]
    fn test_mentor_experience_must_be_numeric() {
        let mut form = MentorForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            experience: "ten".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        form.experience = " 10 ".to_string();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(json_of(form.to_body().unwrap())["experience"], 10);
    }

    #[test]
    fn test_company_logo_switches_to_multipart() {
        let mut form = CompanyForm {
            name: "Acme".to_string(),
            email: "jobs@acme.test".to_string(),
            ..Default::default()
        };
        let body = json_of(form.to_body().unwrap());
        assert_eq!(body["website"], Value::Null);

        form.logo = Some(Upload {
            file_name: "logo.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        });
        let RequestBody::Multipart(multipart) = form.to_body().unwrap() else {
            panic!("expected multipart");
        };
        let names: Vec<&str> = multipart.parts().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "logo"]);
        assert!(matches!(multipart.parts()[2].1, FormValue::File { ref file_name, .. } if file_name == "logo.png"));
    }
}
