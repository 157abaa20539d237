//! Frontend Models
//!
//! Records as the remote API returns them. Identifiers arrive as `_id`;
//! relations arrive either as a bare id or populated with a name.

use leptos_listview::{Facet, Listable};
use serde::{Deserialize, Serialize};

/// A relation to another record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default, alias = "title")]
        name: String,
    },
    Id(String),
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Populated { id, .. } => id.as_str(),
            Reference::Id(id) => id.as_str(),
        }
    }

    /// Display name, falling back to the id when not populated
    pub fn label(&self) -> &str {
        match self {
            Reference::Populated { name, .. } if !name.is_empty() => name.as_str(),
            other => other.id(),
        }
    }

    pub fn facet(&self) -> Facet {
        Facet::new(self.id(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<Reference>,
    #[serde(default)]
    pub category: Option<Reference>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "jobType", default)]
    pub job_type: Option<String>,
    /// Markdown
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mentor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub expertise: Option<String>,
    /// Years of experience
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// The signed-in admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

// ========================
// List Rows
// ========================

fn non_empty(value: &Option<String>) -> Option<Facet> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(Facet::plain)
}

impl Listable for Category {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn facet(&self) -> Option<Facet> {
        self.parent.as_ref().map(Reference::facet)
    }
}

impl Listable for Company {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self) -> Option<Facet> {
        non_empty(&self.location)
    }
}

impl Listable for Job {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(company) = &self.company {
            fields.push(company.label());
        }
        fields
    }

    fn facet(&self) -> Option<Facet> {
        non_empty(&self.job_type)
    }
}

impl Listable for Mentor {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self) -> Option<Facet> {
        non_empty(&self.expertise)
    }
}

impl Listable for Skill {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn facet(&self) -> Option<Facet> {
        non_empty(&self.category)
    }
}

impl Listable for TeamMember {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self) -> Option<Facet> {
        let role = self.role.trim();
        (!role.is_empty()).then(|| Facet::plain(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_listview::{filter_items, ListQuery};
    use serde_json::json;

    #[test]
    fn test_reference_accepts_id_or_populated() {
        let bare: Reference = serde_json::from_value(json!("a1")).unwrap();
        assert_eq!(bare, Reference::Id("a1".to_string()));
        assert_eq!(bare.label(), "a1");

        let populated: Reference = serde_json::from_value(json!({"_id": "a1", "name": "Tech"})).unwrap();
        assert_eq!(populated.id(), "a1");
        assert_eq!(populated.label(), "Tech");
    }

    #[test]
    fn test_category_parent_search_and_filter() {
        let categories: Vec<Category> = serde_json::from_value(json!([
            {"_id": "a", "name": "Tech"},
            {"_id": "b", "name": "Web", "parentId": {"_id": "a", "name": "Tech"}}
        ]))
        .unwrap();

        let mut query = ListQuery::default();
        query.set_search("web");
        let found = filter_items(&categories, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");

        let mut query = ListQuery::default();
        query.set_facet(Some("a".to_string()));
        let found = filter_items(&categories, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");
    }

    #[test]
    fn test_job_search_covers_company_name() {
        let job: Job = serde_json::from_value(json!({
            "id": "j1",
            "title": "Backend Intern",
            "company": {"_id": "c1", "name": "Acme"},
            "jobType": "internship"
        }))
        .unwrap();

        assert_eq!(job.search_fields(), vec!["Backend Intern", "Acme"]);
        assert_eq!(job.facet(), Some(Facet::plain("internship")));
        assert_eq!(job.description, "");
    }

    #[test]
    fn test_blank_facets_are_ignored() {
        let member = TeamMember {
            id: "t1".to_string(),
            name: "Sam".to_string(),
            role: "  ".to_string(),
            email: String::new(),
            photo: None,
        };
        assert_eq!(member.facet(), None);

        let skill = Skill { id: "s1".to_string(), name: "Rust".to_string(), category: Some(String::new()) };
        assert_eq!(skill.facet(), None);
    }
}
