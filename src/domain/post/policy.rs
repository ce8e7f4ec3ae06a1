// src/domain/post/policy.rs
//
// Row-level visibility for posts. Every listing, retrieval, and mutation
// decision across the crate goes through this one module so the rules
// cannot drift between endpoints.
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::PermissionLevel;
use crate::domain::user::{Identity, Role, Team, UserId};

/// Access intent. `Read` covers list, retrieve, like, and comment
/// operations; `Write` covers update and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessVerb {
    Read,
    Write,
}

impl AccessVerb {
    /// The permission-level field this verb is checked against.
    pub fn level_of(&self, post: &Post) -> PermissionLevel {
        match self {
            AccessVerb::Read => post.read_permission,
            AccessVerb::Write => post.edit_permission,
        }
    }
}

/// A listing filter derived from the requester. Repositories translate it
/// to SQL; `matches` evaluates the same rules in memory so the by-id path
/// and the listing path can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Active posts of any permission level. Used for admin listings.
    ActiveOnly,
    /// Active posts whose public/authenticated level, authorship, or team
    /// match admits the viewer.
    Scoped {
        viewer: UserId,
        team: Team,
        verb: AccessVerb,
    },
    /// Active posts with a public read level. Used for anonymous viewers.
    PublicOnly,
}

impl VisibilityScope {
    pub fn matches(&self, post: &Post) -> bool {
        if !post.is_active {
            return false;
        }
        match self {
            VisibilityScope::ActiveOnly => true,
            VisibilityScope::PublicOnly => post.read_permission == PermissionLevel::Public,
            VisibilityScope::Scoped { viewer, team, verb } => {
                // Union of independent clauses: the declared level never
                // restricts the author's or a teammate's own access.
                let level = verb.level_of(post);
                level == PermissionLevel::Public
                    || level == PermissionLevel::Authenticated
                    || post.author_id == *viewer
                    || post.author_team == *team
            }
        }
    }
}

/// The filter a listing for `identity` must apply.
pub fn listing_scope(identity: &Identity, verb: AccessVerb) -> VisibilityScope {
    match identity {
        Identity::Anonymous => VisibilityScope::PublicOnly,
        Identity::Authenticated {
            role: Role::Admin, ..
        } => VisibilityScope::ActiveOnly,
        Identity::Authenticated { id, team, .. } => VisibilityScope::Scoped {
            viewer: *id,
            team: team.clone(),
            verb,
        },
    }
}

/// By-id visibility check. Admins may address any post, soft-deleted
/// included; everyone else falls back to their listing scope, so an
/// invisible post is indistinguishable from an absent one.
pub fn post_visible(identity: &Identity, verb: AccessVerb, post: &Post) -> bool {
    if identity.is_admin() {
        return true;
    }
    // Anonymous requesters cannot satisfy a write check at all.
    if identity.is_anonymous() && verb == AccessVerb::Write {
        return false;
    }
    listing_scope(identity, verb).matches(post)
}
