//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    config::Config,
    error::AppError,
    hooks::{self, CollateralHooks},
    icon::{contracts::irc2, pairs::pairs_for_network, IconRpcClient},
    services::{AddressRegistry, BalancedClient},
    store::{selectors::CollateralInputAmounts, CollateralInput, Store, TypePayload},
    types::{format_units, BalanceInfo, NetworkId, PairInfo, Token},
};

/// Balanced MCP Server.
///
/// Exposes balances, the collateral panel and unclaimed fees of a Balanced
/// account as tools.
#[derive(Clone)]
pub struct BalancedServer {
    client: BalancedClient,
    store: Store,
    default_account: Option<String>,
    tool_router: ToolRouter<Self>,
}

impl BalancedServer {
    /// Create a server over an existing client and store.
    pub fn new(client: BalancedClient, store: Store, default_account: Option<String>) -> Self {
        Self { client, store, default_account, tool_router: Self::tool_router() }
    }

    /// Create a server from configuration.
    ///
    /// No network calls are made here; the node is first contacted when a
    /// tool runs or a poller ticks.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        tracing::info!(network_id = config.network_id, "Initializing Balanced MCP Server");

        let sdk = Arc::new(IconRpcClient::new(&config.rpc_url)?);

        let mut addresses = AddressRegistry::mainnet();
        if let Some(path) = &config.addresses_file {
            addresses = addresses.merge_file(path)?;
        }

        let client = BalancedClient::new(sdk, addresses, config.network_id);
        let server = Self::new(client, Store::new(), config.account.clone());

        tracing::info!("Balanced MCP Server initialized successfully");
        Ok(server)
    }

    pub fn client(&self) -> &BalancedClient {
        &self.client
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    fn account(&self, requested: Option<String>) -> Result<String, McpError> {
        requested.or_else(|| self.default_account.clone()).ok_or_else(|| {
            McpError::invalid_params("No account given and no default account configured", None)
        })
    }

    fn collateral_view(&self) -> CollateralView {
        let hooks = CollateralHooks::new(self.store.clone());
        CollateralView {
            deposited_amount: hooks.deposited_amount(),
            deposited_amount_in_icx: hooks.deposited_amount_in_icx(),
            balance: hooks.available_amount(),
            total_icx_amount: hooks.total_icx_amount(),
            input: hooks.collateral_state(),
            input_amounts: hooks.collateral_input_amounts(),
            collateral_input_amount_in_usd: hooks.collateral_input_amount_in_usd(),
        }
    }
}

/// Input parameters for the get_balance tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetBalanceInput {
    /// Wallet address to query (hx...).
    pub address: String,
    /// Optional token symbol (e.g., "sICX", "bnUSD"). If not provided, returns native ICX balance.
    #[serde(default)]
    pub token: Option<String>,
}

/// Input parameters for the get_collateral_info tool.
#[derive(Debug, Clone, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct GetCollateralInfoInput {
    /// Account to read (hx...). Defaults to the configured account.
    #[serde(default)]
    pub account: Option<String>,
}

/// Input parameters for the get_unclaimed_fees tool.
#[derive(Debug, Clone, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct GetUnclaimedFeesInput {
    /// Account to read (hx...). Defaults to the configured account.
    #[serde(default)]
    pub account: Option<String>,
    /// Read the dividends contract now instead of returning the last polled value.
    #[serde(default)]
    pub refresh: Option<bool>,
}

/// Input parameters for the list_pairs tool.
#[derive(Debug, Clone, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListPairsInput {
    /// Network id. Defaults to the server's network.
    #[serde(default)]
    pub network_id: Option<NetworkId>,
    /// Only pairs with this currency on either side (e.g., "sICX").
    #[serde(default)]
    pub currency: Option<String>,
}

/// Input parameters for the set_collateral_input tool.
#[derive(Debug, Clone, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct SetCollateralInputInput {
    /// true enters adjustment mode, false cancels it and resets the input.
    #[serde(default)]
    pub adjust: Option<bool>,
    /// Field the typed value belongs to: "left" (deposit) or "right" (wallet).
    #[serde(default)]
    pub independent_field: Option<String>,
    /// Amount typed by the user, in ICX.
    #[serde(default)]
    pub typed_value: Option<String>,
    /// "slider" or "text".
    #[serde(default)]
    pub input_type: Option<String>,
}

/// Collateral panel snapshot returned by the collateral tools.
#[derive(Debug, Clone, Serialize)]
pub struct CollateralView {
    pub deposited_amount: Decimal,
    pub deposited_amount_in_icx: Decimal,
    pub balance: Decimal,
    pub total_icx_amount: Decimal,
    pub input: CollateralInput,
    pub input_amounts: CollateralInputAmounts,
    pub collateral_input_amount_in_usd: Decimal,
}

/// One unclaimed fee entry.
#[derive(Debug, Clone, Serialize)]
pub struct FeeView {
    pub token_address: String,
    pub symbol: String,
    pub amount: String,
    pub amount_raw: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl BalancedServer {
    /// Query ICX and Balanced token balances for a wallet address.
    #[tool(
        description = "Query ICX and Balanced token (sICX, bnUSD, BALN, ...) balances for an ICON address"
    )]
    pub async fn get_balance(
        &self,
        Parameters(input): Parameters<GetBalanceInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, token = ?input.token, "get_balance called");

        let token: Token = match &input.token {
            None => Token::icx(),
            Some(symbol) => self.client.tokens().resolve_symbol(symbol).cloned().ok_or_else(|| {
                McpError::invalid_params(format!("Unknown token symbol: '{}'", symbol), None)
            })?,
        };

        let raw = if token.is_native() {
            self.client.icx_balance(&input.address).await?
        } else {
            let contract = self.client.contract(&token.symbol.to_lowercase());
            irc2::balance_of(&contract, &input.address).await?
        };

        to_json(&BalanceInfo {
            address: input.address,
            balance: format_units(raw, token.decimals),
            balance_raw: raw.to_string(),
            token,
        })
    }

    /// Refresh and return the collateral panel of an account.
    #[tool(
        description = "Fetch deposited sICX collateral, available ICX and the sICX/ICX rate for an account, and return the collateral panel state"
    )]
    pub async fn get_collateral_info(
        &self,
        Parameters(input): Parameters<GetCollateralInfoInput>,
    ) -> Result<String, McpError> {
        let account = self.account(input.account)?;
        tracing::info!(account = %account, "get_collateral_info called");

        tokio::try_join!(
            hooks::fetch_collateral_info(&self.client, &self.store, &account),
            hooks::fetch_ratio(&self.client, &self.store),
        )?;

        to_json(&self.collateral_view())
    }

    /// Unclaimed dividend fees of an account.
    #[tool(description = "Return the unclaimed Balanced dividend fees of an account, per token")]
    pub async fn get_unclaimed_fees(
        &self,
        Parameters(input): Parameters<GetUnclaimedFeesInput>,
    ) -> Result<String, McpError> {
        let refresh = input.refresh.unwrap_or(false);
        tracing::info!(account = ?input.account, refresh = refresh, "get_unclaimed_fees called");

        if refresh {
            let account = self.account(input.account)?;
            hooks::fetch_unclaimed_fees(&self.client, &self.store, &account).await?;
        }

        let mut fees: Vec<FeeView> = hooks::unclaimed_fees(&self.store)
            .into_iter()
            .map(|(address, amount)| FeeView {
                token_address: address,
                symbol: amount.token.symbol.clone(),
                amount: amount.to_exact(),
                amount_raw: amount.raw.to_string(),
            })
            .collect();
        fees.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        to_json(&fees)
    }

    /// Supported DEX pairs.
    #[tool(description = "List the trading pairs supported by the Balanced DEX on a network")]
    pub async fn list_pairs(
        &self,
        Parameters(input): Parameters<ListPairsInput>,
    ) -> Result<String, McpError> {
        let network_id = input.network_id.unwrap_or(self.client.network_id());
        tracing::info!(network_id = network_id, currency = ?input.currency, "list_pairs called");

        let pairs: Vec<&PairInfo> = pairs_for_network(network_id)
            .filter(|p| input.currency.as_deref().is_none_or(|c| p.contains(c)))
            .collect();
        to_json(&pairs)
    }

    /// Update the collateral input state.
    #[tool(
        description = "Update the collateral adjustment input (adjust mode, typed value, independent field) and return the recomputed panel"
    )]
    pub async fn set_collateral_input(
        &self,
        Parameters(input): Parameters<SetCollateralInputInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            adjust = ?input.adjust,
            field = ?input.independent_field,
            value = ?input.typed_value,
            "set_collateral_input called"
        );

        let payload = TypePayload {
            independent_field: input.independent_field.as_deref().map(str::parse).transpose()?,
            typed_value: input.typed_value,
            input_type: input.input_type.as_deref().map(str::parse).transpose()?,
        };

        let hooks = CollateralHooks::new(self.store.clone());
        if let Some(adjust) = input.adjust {
            hooks.collateral_adjust(adjust);
        }
        if payload != TypePayload::default() {
            hooks.collateral_type(payload);
        }

        to_json(&self.collateral_view())
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BalancedServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "balanced-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Balanced MCP Server. Provides tools for ICON balances, the Balanced \
                 collateral panel, unclaimed fees and DEX pairs."
                    .to_string(),
            ),
        }
    }
}
