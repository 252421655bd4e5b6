//! ICON network constants.
//!
//! Contains network ids and the Balanced mainnet deployment.

use std::time::Duration;

use crate::types::NetworkId;

// ============================================================================
// Network IDs
// ============================================================================

/// ICON mainnet network id.
pub const MAINNET_NID: NetworkId = 1;

/// Yeouido testnet network id.
pub const YEOUIDO_NID: NetworkId = 3;

/// Default network id (mainnet).
pub const DEFAULT_NID: NetworkId = MAINNET_NID;

// ============================================================================
// Call defaults
// ============================================================================

/// Step limit attached to contract write calls.
pub const DEFAULT_STEP_LIMIT: u64 = 3_000_000;

/// Refresh period of polling hooks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

// ============================================================================
// Balanced Contract Addresses (Mainnet)
// ============================================================================

/// `(role, address)` pairs of the Balanced mainnet deployment.
pub const MAINNET_ADDRESSES: &[(&str, &str)] = &[
    ("loans", "cx66d4d90f5f113eba575bf793570135f9b10cece1"),
    ("staking", "cx43e2eec79eb76293c298f2b17aec06097be606e0"),
    ("dividends", "cx203d9cd2a669be67177e997b8948ce2c35caffae"),
    ("reserve", "cxf58b9a1898998a31be7f1d99276204a3333ac9b3"),
    ("daofund", "cx835b300dcfe01f0bdb794e134a0c5628384f4367"),
    ("rewards", "cx10d59e8103ab44635190bd4139dbfd682fa2d07e"),
    ("dex", "cxa0af3165c08318e988cb30993b3048335b94af6c"),
    ("governance", "cx44250a12074799e26fdeee75648ae47e2cc84219"),
    ("band", "cxe647e0af68a4661566f5e9861ad4ac854de808a2"),
    ("sicx", "cx2609b924e33ef00b648a409245c7ea394c467824"),
    ("bnusd", "cx88fd7df7ddff82f7cc735c871dc519838cb235bb"),
    ("baln", "cxf61cd5a45dc9f91c15aa65831a30a90d59a09619"),
    ("iusdc", "cxae3034235540b924dfcc1b45836c293dcc82bfb7"),
    ("omm", "cx1a29259a59f463a67bb2ef84398b30ca56b5830a"),
    ("usds", "cxbb2871f468a3008f80b08fdde5b8b951583acf06"),
];
