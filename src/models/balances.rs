use rust_decimal::Decimal;
use serde::Serialize;

/// Summary view of the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Balances {
    pub bank_balance: Decimal,
    pub wallet_balance: Decimal,
    pub total_balance: Decimal,
    pub today_expense: Decimal,
    pub monthly_expense: Decimal,
}

impl Balances {
    pub fn new(
        bank_balance: Decimal,
        wallet_balance: Decimal,
        today_expense: Decimal,
        monthly_expense: Decimal,
    ) -> Self {
        Self {
            bank_balance,
            wallet_balance,
            total_balance: bank_balance + wallet_balance,
            today_expense,
            monthly_expense,
        }
    }
}
