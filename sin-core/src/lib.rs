//! sin core - map GitHub issues into Jira's JSON importer format
//!
//! The mapper is a pure transformation over already fetched records. Fetching
//! is abstracted behind [`IssueSource`], implemented by the `sin-github` crate.

pub mod config;
pub mod error;
pub mod export;
pub mod identity;
pub mod mapper;
pub mod repository;
pub mod secrets;
pub mod source;
pub mod status;
pub mod ticket;

pub use config::{Config, ConfigOverrides};
pub use error::{Error, Result};
pub use export::Exporter;
pub use identity::{IdentityLookup, UserDirectory};
pub use mapper::{MappingContext, TicketMapper};
pub use repository::{parse_repository, repository_name};
pub use secrets::Secrets;
pub use source::{
    IssueSource, IssueState, IssueStateFilter, SourceComment, SourceIssue, SourceLabel, SourceUser,
};
pub use status::StatusMap;
pub use ticket::{CustomFieldValue, ImportDocument, ImportProject, Ticket, TicketComment};
