//! Client library for the Vagas job-board backend.
//!
//! The backend is a hosted PostgREST-style REST service: filter predicates
//! travel as query parameters (`ilike`, `eq`, `or=(...)`), pagination as an
//! inclusive `Range` header, and total match counts come back in the
//! `Content-Range` response header when `Prefer: count=exact` is sent.
//!
//! [`VagaLinkClient`] owns the HTTP transport; [`JobQuery`] assembles the
//! predicate set and row range for a page of listings.

pub mod auth;
pub mod client;
pub mod content_range;
pub mod error;
pub mod models;
pub mod query;
pub mod timeouts;

pub use auth::ApiKey;
pub use client::{VagaLinkClient, VagaLinkClientBuilder};
pub use content_range::parse_total_count;
pub use error::{Result, VagaLinkError};
pub use models::{
    Benefit, CompanyRef, Education, ErrorDetail, Experience, JobDetail, JobPage, JobSummary,
    Responsibility, SalaryRange, SalaryRow, Skill,
};
pub use query::{JobFilter, JobQuery, DEFAULT_PAGE_SIZE};
pub use timeouts::{VagaLinkTimeouts, VagaLinkTimeoutsBuilder};
