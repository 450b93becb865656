// web_app/wallet.rs - Wallet connection state
//
// The storefront only needs to know whether a wallet is connected and which
// address it exposes. The provider (browser extension, test double) is passed
// in by the caller; the connection state belongs to the UI instance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no wallet provider found; install a wallet extension such as MetaMask")]
    ProviderMissing,
    #[error("wallet request rejected: {0}")]
    Rejected(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
}

/// Capability exposed by an injected wallet provider
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Ask the user to grant account access; returns the granted accounts
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Address of the active signer
    async fn get_address(&self) -> Result<String, WalletError>;
}

/// Request account access, then read the signer address
pub async fn resolve_address<P: WalletProvider>(provider: &P) -> Result<String, WalletError> {
    let accounts = provider.request_accounts().await?;
    if accounts.is_empty() {
        return Err(WalletError::NoAccounts);
    }
    provider.get_address().await
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    address: Option<String>,
}

impl WalletConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Address shortened for display, e.g. `0x5FbD…0aa3`
    pub fn short_address(&self) -> Option<String> {
        let address = self.address.as_deref()?;
        let chars: Vec<char> = address.chars().collect();
        if chars.len() <= 10 {
            return Some(address.to_string());
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{head}…{tail}"))
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.address.take() {
            tracing::info!("Wallet disconnected: {}", address);
        }
    }

    /// Record the result of a connection attempt; any failure disconnects
    pub fn apply(&mut self, result: Result<String, WalletError>) -> Result<(), WalletError> {
        match result {
            Ok(address) => {
                tracing::info!("Wallet connected: {}", address);
                self.address = Some(address);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Wallet connection failed: {}", e);
                self.address = None;
                Err(e)
            }
        }
    }

    pub async fn connect<P: WalletProvider>(&mut self, provider: &P) -> Result<(), WalletError> {
        let result = resolve_address(provider).await;
        self.apply(result)
    }

    /// Connect when disconnected, disconnect when connected
    ///
    /// Without a provider nothing changes and `ProviderMissing` is returned.
    pub async fn toggle<P: WalletProvider>(&mut self, provider: Option<&P>) -> Result<(), WalletError> {
        let Some(provider) = provider else {
            return Err(WalletError::ProviderMissing);
        };

        if self.is_connected() {
            self.disconnect();
            Ok(())
        } else {
            self.connect(provider).await
        }
    }
}
