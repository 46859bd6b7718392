//! Sample folder collections.

use hierarchy_core::config::sample::SampleConfig;
use hierarchy_core::types::OrganizationId;
use hierarchy_entity::folder::Folder;
use tracing::debug;

use crate::path::PathCodec;

/// Generates a collection for `config.organizations` fresh organizations.
pub fn generate_sample(config: &SampleConfig, codec: &PathCodec) -> Vec<Folder> {
    let organizations: Vec<OrganizationId> = (0..config.organizations)
        .map(|_| OrganizationId::new())
        .collect();
    generate_for(&organizations, config, codec)
}

/// Generates the same tree shape under each of the given organizations.
///
/// Roots are named `r1`, `r2`, ... and each child appends its position, so
/// `r1-2-1` is the first child of the second child of `r1`. Names repeat
/// across organizations but never within one. Output is depth-first.
pub fn generate_for(
    organizations: &[OrganizationId],
    config: &SampleConfig,
    codec: &PathCodec,
) -> Vec<Folder> {
    let mut folders = Vec::new();
    for &organization_id in organizations {
        for root in 1..=config.roots {
            let name = format!("r{root}");
            push_subtree(&mut folders, organization_id, name.clone(), name, 0, config, codec);
        }
    }

    debug!(
        organizations = organizations.len(),
        folders = folders.len(),
        "Generated sample folders"
    );
    folders
}

fn push_subtree(
    folders: &mut Vec<Folder>,
    organization_id: OrganizationId,
    name: String,
    path: String,
    level: usize,
    config: &SampleConfig,
    codec: &PathCodec,
) {
    let children: Vec<(String, String)> = if level < config.depth {
        (1..=config.fanout)
            .map(|pos| {
                let child = format!("{name}-{pos}");
                let child_path = codec.join(&path, &child);
                (child, child_path)
            })
            .collect()
    } else {
        Vec::new()
    };

    folders.push(Folder::new(name, organization_id, path));

    for (child, child_path) in children {
        push_subtree(folders, organization_id, child, child_path, level + 1, config, codec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shape_and_order() {
        let org = OrganizationId::from_str_or_nil("c59cc5c1-9b81-4d00-95e3-22c6efdaf134");
        let config = SampleConfig {
            organizations: 1,
            roots: 1,
            depth: 2,
            fanout: 2,
        };

        let folders = generate_for(&[org], &config, &PathCodec::default());
        let paths: Vec<&str> = folders.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "r1",
                "r1.r1-1",
                "r1.r1-1.r1-1-1",
                "r1.r1-1.r1-1-2",
                "r1.r1-2",
                "r1.r1-2.r1-2-1",
                "r1.r1-2.r1-2-2",
            ]
        );
        assert!(folders.iter().all(|f| f.path.ends_with(&f.name)));
    }

    #[test]
    fn test_names_unique_per_organization() {
        let config = SampleConfig::default();
        let folders = generate_sample(&config, &PathCodec::default());

        let orgs: HashSet<OrganizationId> = folders.iter().map(|f| f.organization_id).collect();
        assert_eq!(orgs.len(), config.organizations);

        for org in orgs {
            let names: Vec<&str> = folders
                .iter()
                .filter(|f| f.organization_id == org)
                .map(|f| f.name.as_str())
                .collect();
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(names.len(), unique.len());
        }
    }

    #[test]
    fn test_roots_only() {
        let config = SampleConfig {
            organizations: 1,
            roots: 3,
            depth: 0,
            fanout: 0,
        };
        let folders = generate_sample(&config, &PathCodec::default());
        assert_eq!(folders.len(), 3);
    }
}
