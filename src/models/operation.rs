//! Operation taxonomy.
//!
//! Every operation the adapter emits carries one [`OperationType`] and one
//! [`OperationStatus`]. Raw trace action strings are decoded with [`classify`], which
//! fails loudly on anything outside the taxonomy instead of guessing.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::registry::RegistryError;

/// Closed set of operation kinds, in the order they are advertised to clients.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	PartialOrd,
	Ord,
	Display,
	AsRefStr,
	IntoStaticStr,
	EnumIter,
	EnumCount,
)]
pub enum OperationType {
	/// Block reward credited to the miner
	#[strum(serialize = "MINER_REWARD")]
	MinerReward,
	/// Reward credited to the miner of an included uncle
	#[strum(serialize = "UNCLE_REWARD")]
	UncleReward,
	/// Transaction fee paid by the sender
	#[strum(serialize = "FEE")]
	Fee,
	#[strum(serialize = "CALL")]
	Call,
	#[strum(serialize = "CREATE")]
	Create,
	#[strum(serialize = "CREATE2")]
	Create2,
	#[strum(serialize = "SELFDESTRUCT")]
	SelfDestruct,
	#[strum(serialize = "CALLCODE")]
	CallCode,
	#[strum(serialize = "DELEGATECALL")]
	DelegateCall,
	#[strum(serialize = "STATICCALL")]
	StaticCall,
	/// Synthetic operation removing the residual funds of a self-destructed account.
	///
	/// Never reported by a node; the trace adapter decides when to emit it.
	#[strum(serialize = "DESTRUCT")]
	Destruct,
}

/// Coarse grouping used by adapters to pick how an operation affects balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationFamily {
	/// Value-transfer-bearing calls
	Call,
	/// Contract deployment
	Create,
	/// Miner and uncle rewards
	Reward,
	Fee,
	SelfDestruct,
	/// Synthetic residual-funds cleanup
	Destruct,
}

impl OperationType {
	/// All operation types, in advertised order.
	pub fn all() -> Vec<OperationType> {
		Self::iter().collect()
	}

	/// The wire tag of this operation type.
	pub fn as_str(&self) -> &'static str {
		(*self).into()
	}

	pub fn family(&self) -> OperationFamily {
		match self {
			Self::Call | Self::CallCode | Self::DelegateCall | Self::StaticCall => {
				OperationFamily::Call
			}
			Self::Create | Self::Create2 => OperationFamily::Create,
			Self::MinerReward | Self::UncleReward => OperationFamily::Reward,
			Self::Fee => OperationFamily::Fee,
			Self::SelfDestruct => OperationFamily::SelfDestruct,
			Self::Destruct => OperationFamily::Destruct,
		}
	}

	pub fn is_call(&self) -> bool {
		self.family() == OperationFamily::Call
	}

	pub fn is_create(&self) -> bool {
		self.family() == OperationFamily::Create
	}

	/// Tags of all operation types, in advertised order.
	pub fn tags() -> Vec<String> {
		Self::iter().map(|t| t.as_str().to_string()).collect()
	}
}

/// Decodes a tag without logging; `None` for anything outside the taxonomy.
fn decode(action: &str) -> Option<OperationType> {
	match action {
		"MINER_REWARD" => Some(OperationType::MinerReward),
		"UNCLE_REWARD" => Some(OperationType::UncleReward),
		"FEE" => Some(OperationType::Fee),
		"CALL" => Some(OperationType::Call),
		"CREATE" => Some(OperationType::Create),
		"CREATE2" => Some(OperationType::Create2),
		"SELFDESTRUCT" => Some(OperationType::SelfDestruct),
		"CALLCODE" => Some(OperationType::CallCode),
		"DELEGATECALL" => Some(OperationType::DelegateCall),
		"STATICCALL" => Some(OperationType::StaticCall),
		"DESTRUCT" => Some(OperationType::Destruct),
		_ => None,
	}
}

/// Decodes a raw action tag into its [`OperationType`].
///
/// Matching is exact and case-sensitive. Unknown tags fail with
/// [`RegistryError::UnrecognizedOperationType`].
pub fn classify(action: &str) -> Result<OperationType, RegistryError> {
	decode(action).ok_or_else(|| {
		RegistryError::unrecognized_operation_type(
			format!("unrecognized operation type: {}", action),
			None,
			Some(HashMap::from([(
				"operation_type".to_string(),
				action.to_string(),
			)])),
		)
	})
}

/// Returns true iff `action` is `CALL`, `CALLCODE`, `DELEGATECALL` or `STATICCALL`.
pub fn is_call_family(action: &str) -> bool {
	decode(action).is_some_and(|t| t.is_call())
}

/// Returns true iff `action` is `CREATE` or `CREATE2`.
pub fn is_create_family(action: &str) -> bool {
	decode(action).is_some_and(|t| t.is_create())
}

impl FromStr for OperationType {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		classify(s)
	}
}

impl TryFrom<&str> for OperationType {
	type Error = RegistryError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		classify(value)
	}
}

impl Serialize for OperationType {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for OperationType {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let tag = String::deserialize(deserializer)?;
		decode(&tag).ok_or_else(|| {
			serde::de::Error::custom(format!("unrecognized operation type: {}", tag))
		})
	}
}

/// Outcome of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum OperationStatusKind {
	Success,
	Failure,
}

impl OperationStatusKind {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Success => "SUCCESS",
			Self::Failure => "FAILURE",
		}
	}

	pub fn successful(&self) -> bool {
		matches!(self, Self::Success)
	}

	/// Strict, case-sensitive lookup by label.
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"SUCCESS" => Some(Self::Success),
			"FAILURE" => Some(Self::Failure),
			_ => None,
		}
	}

	pub fn status(&self) -> OperationStatus {
		OperationStatus {
			status: self.label().to_string(),
			successful: self.successful(),
		}
	}
}

impl fmt::Display for OperationStatusKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Status label and whether it counts as successful, as advertised to clients
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationStatus {
	pub status: String,
	pub successful: bool,
}

impl OperationStatus {
	/// Both supported statuses, success first.
	pub fn all() -> Vec<OperationStatus> {
		OperationStatusKind::iter().map(|k| k.status()).collect()
	}
}
