//! Reference reconciliation over a fully discovered repository
//!
//! Two kinds of links are upgraded to resolved links:
//!
//! 1. declared project references that carried no identity but whose target
//!    path turned out to be a discovered project;
//! 2. placeholders (raw library or assembly names) whose file stem names
//!    exactly one discovered project.
//!
//! Rewrites for a node are collected from an immutable view first and
//! applied afterwards, so results do not depend on iteration order.

use super::GraphError;
use super::link::{LinkKey, LinkSet, ProjectLink};
use super::repository::ProjectRepository;
use tracing::{debug, trace};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Children,
    Parents,
}

#[derive(Debug)]
struct Rewrite {
    node: Uuid,
    side: Side,
    old: LinkKey,
    new: ProjectLink,
}

/// Number of links rewritten
pub fn reconcile(repository: &mut ProjectRepository) -> Result<usize, GraphError> {
    let mut rewrites = Vec::new();

    for node in repository.iter() {
        for (side, links) in [(Side::Children, node.children()), (Side::Parents, node.parents())] {
            for link in links.iter() {
                if let Some(new) = resolve_link(repository, link)? {
                    rewrites.push(Rewrite {
                        node: node.id(),
                        side,
                        old: link.key(),
                        new,
                    });
                }
            }
        }
    }

    let count = rewrites.len();
    for rewrite in rewrites {
        apply(repository, rewrite);
    }

    debug!(rewritten = count, "Reconciled references");
    Ok(count)
}

/// Resolved replacement for a link, if it names exactly one project
pub fn resolve_link(
    repository: &ProjectRepository,
    link: &ProjectLink,
) -> Result<Option<ProjectLink>, GraphError> {
    if link.is_placeholder() {
        let stem = link.stem();
        let target = unique_match(repository, &stem)?;
        return Ok(target.and_then(|id| repository.get(&id)).map(ProjectLink::to_node));
    }

    if link.id().is_none() {
        return Ok(repository
            .find_by_path(link.target())
            .map(ProjectLink::to_node));
    }

    Ok(None)
}

/// The single project registered under `name`; `AmbiguousName` when
/// several are.
pub fn unique_match(repository: &ProjectRepository, name: &str) -> Result<Option<Uuid>, GraphError> {
    match repository.find_by_name(name) {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        candidates => Err(GraphError::AmbiguousName {
            name: name.to_string(),
            candidates: candidates
                .iter()
                .filter_map(|id| repository.get(id))
                .map(|node| node.path().display().to_string())
                .collect(),
        }),
    }
}

fn apply(repository: &mut ProjectRepository, rewrite: Rewrite) {
    let Rewrite {
        node,
        side,
        old,
        new,
    } = rewrite;

    let Some(referrer) = repository.get(&node) else {
        return;
    };
    let back_link = ProjectLink::to_node(referrer);
    let target = new.id();

    trace!(node = %node, old = ?old, new = %new.target().display(), "Rewriting link");
    if let Some(referrer) = repository.get_mut(&node) {
        let links: &mut LinkSet = match side {
            Side::Children => referrer.children_mut(),
            Side::Parents => referrer.parents_mut(),
        };
        links.replace(&old, new);
    }

    // A resolved child link implies the matching parent link
    if let (Side::Children, Some(target)) = (side, target) {
        repository.add_parent_link(&target, back_link);
    }
}

#[cfg(test)]
mod tests {
    include!("reconcile.test.rs");
}
