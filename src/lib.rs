//! Membership and access-control core for a multi-tenant error tracker.
//!
//! A [`domain::Project`] owns an ordered collection of embedded
//! [`domain::Member`]s; visibility and authorization derive from that
//! membership graph through one predicate (`Project::is_member`), applied
//! both by the `access_by` listing and by the per-object guard in
//! [`utils::project::check_access_for_project`]. Error counters on a
//! project are bumped by the store-level hooks in
//! [`services::error_events`].
//!
//! The HTTP layer, sessions, and the real document database live in the
//! embedding application; the stores here are trait capabilities with
//! in-memory implementations under [`services::data_stores`].

pub mod app_state;
pub mod domain;
pub mod services;
pub mod utils;
