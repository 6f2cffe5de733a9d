use serde::{Deserialize, Serialize};

use crate::utils::constants::{CURRENCY_DECIMALS, CURRENCY_SYMBOL};

/// Native currency shared by every operation amount on every supported network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
	pub symbol: String,
	pub decimals: u8,
}

impl Currency {
	/// The single native asset, `CORE` with 18 decimals.
	pub fn native() -> Self {
		Self {
			symbol: CURRENCY_SYMBOL.to_string(),
			decimals: CURRENCY_DECIMALS,
		}
	}
}

impl Default for Currency {
	fn default() -> Self {
		Self::native()
	}
}
