//! Static marketing content for the public pages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityKind {
    Job,
    Internship,
    Mentorship,
    Course,
    Competition,
}

impl OpportunityKind {
    pub fn label(self) -> &'static str {
        match self {
            OpportunityKind::Job => "Job",
            OpportunityKind::Internship => "Internship",
            OpportunityKind::Mentorship => "Mentorship",
            OpportunityKind::Course => "Course",
            OpportunityKind::Competition => "Competition",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            OpportunityKind::Job => "kind-job",
            OpportunityKind::Internship => "kind-internship",
            OpportunityKind::Mentorship => "kind-mentorship",
            OpportunityKind::Course => "kind-course",
            OpportunityKind::Competition => "kind-competition",
        }
    }
}

pub struct Opportunity {
    pub kind: OpportunityKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
}

pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_TITLE: &str = "Start your career with the right people";
pub const HERO_SUBTITLE: &str =
    "Find jobs and internships, learn from mentors and prove your skills in competitions.";

pub static OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        kind: OpportunityKind::Job,
        title: "Junior Backend Engineer",
        organization: "Northwind Labs",
        summary: "Build APIs for a logistics platform with a small, senior team.",
    },
    Opportunity {
        kind: OpportunityKind::Internship,
        title: "Data Analyst Intern",
        organization: "Bluefin Analytics",
        summary: "Twelve weeks of hands-on reporting work, paid and remote friendly.",
    },
    Opportunity {
        kind: OpportunityKind::Mentorship,
        title: "Product Design Mentorship",
        organization: "Design Circle",
        summary: "Monthly one-on-one portfolio reviews with working designers.",
    },
    Opportunity {
        kind: OpportunityKind::Course,
        title: "Cloud Foundations",
        organization: "Open Campus",
        summary: "A six-week introduction to deploying and operating web services.",
    },
    Opportunity {
        kind: OpportunityKind::Competition,
        title: "Campus Hackathon 2026",
        organization: "CareerBridge",
        summary: "Forty-eight hours, teams of four, prizes from partner companies.",
    },
];

pub static SLIDES: &[Slide] = &[
    Slide {
        title: "120+ partner companies",
        body: "Employers post roles directly, so every listing is current.",
    },
    Slide {
        title: "Mentors from the industry",
        body: "Book time with practitioners in engineering, design and business.",
    },
    Slide {
        title: "Learn, then compete",
        body: "Courses lead into competitions that partners use to find talent.",
    },
];

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is CareerBridge free for students?",
        answer: "Yes. Browsing, applying and booking mentors costs nothing.",
    },
    FaqEntry {
        question: "How do companies post opportunities?",
        answer: "Partner companies are onboarded by our team and their listings are managed from the admin dashboard.",
    },
    FaqEntry {
        question: "Can I be a mentor?",
        answer: "Anyone with two or more years of industry experience can apply to mentor.",
    },
    FaqEntry {
        question: "Are internships paid?",
        answer: "Every internship listed on CareerBridge is paid.",
    },
];
