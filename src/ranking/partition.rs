//! Split the reference library into the "all" group and one group per tag

use crate::core::{Group, GroupKey, LibraryEntry};

/// Partition the whole library.
///
/// Returns the "all" group first, then one group per requested tag in request
/// order. Tags match by exact string equality; a tag nobody carries yields an
/// empty group. Repeated tags produce a single group.
pub fn partition(library: &[LibraryEntry], tags: &[String]) -> Vec<Group> {
	partition_subset(library, 0..library.len(), tags)
}

/// Partition only the library rows listed in `eligible`
pub fn partition_subset<I>(library: &[LibraryEntry], eligible: I, tags: &[String]) -> Vec<Group>
where
	I: IntoIterator<Item = usize>,
{
	let eligible: Vec<usize> = eligible.into_iter().filter(|&i| i < library.len()).collect();

	let mut groups = Vec::with_capacity(tags.len() + 1);
	groups.push(Group {
		key: GroupKey::All,
		members: eligible.clone(),
	});

	for tag in tags {
		if groups.iter().any(|g| matches!(&g.key, GroupKey::Tag(t) if t == tag)) {
			continue;
		}
		let members = eligible
			.iter()
			.copied()
			.filter(|&i| library[i].has_tag(tag))
			.collect();
		groups.push(Group {
			key: GroupKey::Tag(tag.clone()),
			members,
		});
	}

	groups
}

/// Tag usage across the library, most common first (ties alphabetical)
pub fn tag_counts(library: &[LibraryEntry]) -> Vec<(String, usize)> {
	let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
	for entry in library {
		let mut seen: Vec<&str> = Vec::new();
		for tag in &entry.tags {
			if !seen.contains(&tag.as_str()) {
				seen.push(tag);
				*counts.entry(tag).or_default() += 1;
			}
		}
	}

	let mut counts: Vec<(String, usize)> = counts
		.into_iter()
		.map(|(tag, n)| (tag.to_string(), n))
		.collect();
	counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	counts
}
