use super::GraphError;
use super::link::{LinkKey, ProjectLink};
use super::reconcile::unique_match;
use super::repository::ProjectRepository;
use super::root::RootGraph;
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, trace};
use uuid::Uuid;

/// Resolve the primary graph's remaining placeholders against each
/// secondary graph in turn, importing each matched project together with
/// its descendants. Returns the number of imported nodes.
pub fn merge_graphs(primary: &mut RootGraph, secondaries: &[RootGraph]) -> Result<usize, GraphError> {
    let mut imported = 0;

    for secondary in secondaries {
        // (referrer, placeholder key, name)
        let pending: Vec<(Uuid, LinkKey, String)> = primary
            .repository
            .iter()
            .flat_map(|node| {
                node.children()
                    .placeholders()
                    .map(move |link| (node.id(), link.key(), link.stem()))
            })
            .collect();

        for (referrer, key, name) in pending {
            let Some(matched) = unique_match(&secondary.repository, &name)? else {
                continue;
            };
            let Some(node) = secondary.repository.get(&matched) else {
                continue;
            };
            let resolved = ProjectLink::to_node(node);

            imported += import_descendants(&mut primary.repository, &secondary.repository, matched);

            let Some(referrer_node) = primary.repository.get_mut(&referrer) else {
                continue;
            };
            referrer_node.children_mut().replace(&key, resolved);
            let back_link = ProjectLink::to_node(referrer_node);
            primary.repository.add_parent_link(&matched, back_link);

            trace!(
                referrer = %referrer,
                name = %name,
                source = %secondary.name,
                "Resolved placeholder from secondary graph"
            );
        }
    }

    debug!(
        root = %primary.name,
        secondaries = secondaries.len(),
        imported,
        "Merged graphs"
    );
    Ok(imported)
}

/// Copy `start` and everything reachable through its child links. Parent
/// links are never followed; imported nodes keep only the parent links that
/// point inside the imported set or at projects the target already holds.
fn import_descendants(target: &mut ProjectRepository, source: &ProjectRepository, start: Uuid) -> usize {
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut closure = Vec::new();

    while let Some(id) = queue.pop_front() {
        let Some(node) = source.get(&id) else {
            continue;
        };

        for child in node.children().iter().filter_map(ProjectLink::id) {
            if source.contains(&child) && visited.insert(child) {
                queue.push_back(child);
            }
        }
        closure.push(node);
    }

    let mut inserted = 0;
    for node in closure {
        let mut node = node.clone();
        node.parents_mut().retain(|link| {
            link.id()
                .is_some_and(|parent| visited.contains(&parent) || target.contains(&parent))
        });

        if !target.contains(&node.id()) {
            inserted += 1;
        }
        target.insert(node);
    }

    inserted
}

#[cfg(test)]
mod tests {
    include!("merge.test.rs");
}
