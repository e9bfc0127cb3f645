use serde::Serialize;

/// The institution that sent a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "EBL")]
    BankCard,
    #[serde(rename = "bKash")]
    MobileWallet,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCard => "EBL",
            Self::MobileWallet => "bKash",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ebl" | "bank" | "bankcard" => Some(Self::BankCard),
            "bkash" | "wallet" | "mobilewallet" => Some(Self::MobileWallet),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A known notice template. Each platform has its own ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    BankDebitCredit,
    BankCashWithdrawal,
    BankFundTransfer,
    WalletDeposit,
    WalletCashIn,
    WalletPayment,
}

impl Shape {
    pub fn platform(&self) -> Platform {
        match self {
            Self::BankDebitCredit | Self::BankCashWithdrawal | Self::BankFundTransfer => {
                Platform::BankCard
            }
            Self::WalletDeposit | Self::WalletCashIn | Self::WalletPayment => {
                Platform::MobileWallet
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankDebitCredit => "bank_debit_credit",
            Self::BankCashWithdrawal => "bank_cash_withdrawal",
            Self::BankFundTransfer => "bank_fund_transfer",
            Self::WalletDeposit => "wallet_deposit",
            Self::WalletCashIn => "wallet_cash_in",
            Self::WalletPayment => "wallet_payment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|shape| shape.as_str() == s)
    }

    pub fn all() -> &'static [Shape] {
        &[
            Self::BankDebitCredit,
            Self::BankCashWithdrawal,
            Self::BankFundTransfer,
            Self::WalletDeposit,
            Self::WalletCashIn,
            Self::WalletPayment,
        ]
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
