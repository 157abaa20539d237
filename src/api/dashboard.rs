//! Dashboard totals

use super::{resources, ApiClient, Resource};
use crate::models::{Category, Company, Job, Mentor, Skill, TeamMember};

/// One counter per collection. `None` when that fetch failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub companies: Option<usize>,
    pub jobs: Option<usize>,
    pub mentors: Option<usize>,
    pub categories: Option<usize>,
    pub skills: Option<usize>,
    pub team: Option<usize>,
}

impl DashboardCounts {
    /// Sum of the counters that loaded
    pub fn total(&self) -> usize {
        [self.companies, self.jobs, self.mentors, self.categories, self.skills, self.team]
            .into_iter()
            .flatten()
            .sum()
    }
}

async fn count<R: Resource>(client: &ApiClient) -> Option<usize> {
    match resources::list::<R>(client).await {
        Ok(rows) => Some(rows.len()),
        Err(e) => {
            log::warn!("[dashboard] {} count unavailable: {}", R::NOUN, e);
            None
        }
    }
}

/// Fetch all six collections at once
pub async fn fetch_counts(client: &ApiClient) -> DashboardCounts {
    let (companies, jobs, mentors, categories, skills, team) = futures::join!(
        count::<Company>(client),
        count::<Job>(client),
        count::<Mentor>(client),
        count::<Category>(client),
        count::<Skill>(client),
        count::<TeamMember>(client),
    );
    DashboardCounts { companies, jobs, mentors, categories, skills, team }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{signed_in, ScriptedTransport};
    use crate::api::Method;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_one_failure_leaves_the_rest() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Get, "/companies", 200, r#"[{"_id": "c1", "name": "Acme"}]"#)
                .respond(Method::Get, "/jobs", 200, r#"{"jobs": [{"_id": "j1", "title": "A"}, {"_id": "j2", "title": "B"}]}"#)
                .fail(Method::Get, "/mentors", "offline")
                .respond(Method::Get, "/categories", 200, r#"{"data": []}"#)
                .respond(Method::Get, "/skills", 500, "")
                .respond(Method::Get, "/team", 200, r#"{"members": [{"_id": "t1", "name": "Sam"}]}"#),
        );
        let client = signed_in(transport.clone());

        let counts = fetch_counts(&client).await;
        assert_eq!(
            counts,
            DashboardCounts {
                companies: Some(1),
                jobs: Some(2),
                mentors: None,
                categories: Some(0),
                skills: None,
                team: Some(1),
            }
        );
        assert_eq!(counts.total(), 4);
        assert_eq!(transport.count(Method::Get), 6);
    }
}
