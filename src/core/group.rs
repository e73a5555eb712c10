//! Named subsets of the reference library

use serde::{Serialize, Serializer};

use crate::config::ALL_GROUP;

/// Selector of a group: the whole library or one tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
	All,
	Tag(String),
}

impl GroupKey {
	pub fn label(&self) -> &str {
		match self {
			GroupKey::All => ALL_GROUP,
			GroupKey::Tag(tag) => tag,
		}
	}

	pub fn is_tag(&self) -> bool {
		matches!(self, GroupKey::Tag(_))
	}
}

impl std::fmt::Display for GroupKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GroupKey::All => write!(f, "{}", ALL_GROUP),
			GroupKey::Tag(tag) => write!(f, "#{}", tag),
		}
	}
}

impl Serialize for GroupKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.label())
	}
}

/// Group members are indices into the library table
#[derive(Debug, Clone)]
pub struct Group {
	pub key: GroupKey,
	pub members: Vec<usize>,
}

impl Group {
	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}
