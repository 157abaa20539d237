//! UI Components
//!
//! Reusable Leptos components.

mod cards;
mod faq;
mod fields;
mod layout;
mod modal;
mod notice;
mod pagination;
mod slider;
mod toolbar;

pub use cards::{Hero, OpportunityGrid};
pub use faq::FaqAccordion;
pub use fields::{FileField, SelectField, TextField};
pub use layout::{AdminLayout, SiteFooter, SiteHeader};
pub use modal::{ConfirmDeleteModal, FormModal, Modal};
pub use notice::NoticeToast;
pub use pagination::Pagination;
pub use slider::Slider;
pub use toolbar::Toolbar;
