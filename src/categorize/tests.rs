#![allow(clippy::unwrap_used)]

use super::*;

fn categorize(shape: Shape, clues: &Clues<'_>) -> TransactionType {
    Categorizer::new().unwrap().categorize(shape, clues)
}

fn clues<'a>(verb: &'a str, counterparty: &'a str, description: &'a str, message: &'a str) -> Clues<'a> {
    Clues {
        verb,
        counterparty,
        description,
        message,
    }
}

fn bank_debit_credit(verb: &str, description: &str) -> TransactionType {
    categorize(
        Shape::BankDebitCredit,
        &clues(verb, description, description, "AC 1***2 is ..."),
    )
}

fn wallet(shape: Shape, counterparty: &str, message: &str) -> TransactionType {
    categorize(shape, &clues("", counterparty, "", message))
}

// ── Bank rules ────────────────────────────────────────────────

#[test]
fn test_bank_debit_is_expense() {
    assert_eq!(bank_debit_credit("debited", "POS Purchase"), TransactionType::Expense);
    assert_eq!(bank_debit_credit("debited", "Grocery Store"), TransactionType::Expense);
}

#[test]
fn test_bank_debit_to_wallet_is_transfer_out() {
    assert_eq!(
        bank_debit_credit("debited", "Transfer to bKash"),
        TransactionType::InternalTransferOut
    );
    assert_eq!(
        bank_debit_credit("debited", "BKASH ADD MONEY"),
        TransactionType::InternalTransferOut
    );
}

#[test]
fn test_bank_counterparty_flip() {
    // Only the counterparty differs
    assert_eq!(bank_debit_credit("debited", "Rahim Traders"), TransactionType::Expense);
    assert_eq!(
        bank_debit_credit("debited", "bKash"),
        TransactionType::InternalTransferOut
    );
}

#[test]
fn test_bank_credit_is_income() {
    assert_eq!(bank_debit_credit("credited", "Salary"), TransactionType::Income);
}

#[test]
fn test_bank_purchase_keyword_wins_over_credit() {
    // Expense keywords are checked before the credited verb
    assert_eq!(bank_debit_credit("credited", "POS Purchase Reversal"), TransactionType::Expense);
}

#[test]
fn test_bank_cash_withdrawal_is_expense() {
    let t = categorize(
        Shape::BankCashWithdrawal,
        &clues("cash wd", "ATM Gulshan", "Cash WD from ATM Gulshan", ""),
    );
    assert_eq!(t, TransactionType::Expense);
}

#[test]
fn test_bank_fund_transfer_from_wallet_is_transfer_in() {
    let t = categorize(
        Shape::BankFundTransfer,
        &clues("fund transfer", "bKash", "Fund Transfer from bKash", ""),
    );
    assert_eq!(t, TransactionType::InternalTransferIn);
}

#[test]
fn test_bank_fund_transfer_from_other_is_income() {
    let t = categorize(
        Shape::BankFundTransfer,
        &clues("fund transfer", "City Bank", "Fund Transfer from City Bank", ""),
    );
    assert_eq!(t, TransactionType::Income);
}

#[test]
fn test_bank_unmatched_is_unknown() {
    assert_eq!(bank_debit_credit("reversed", "Something"), TransactionType::Unknown);
}

// ── Wallet rules ──────────────────────────────────────────────

#[test]
fn test_wallet_payment_is_expense() {
    let t = wallet(Shape::WalletPayment, "01898765432", "Payment Tk 200 to 01898765432 successful.");
    assert_eq!(t, TransactionType::Expense);
}

#[test]
fn test_wallet_cash_out_and_send_money_are_expense() {
    assert_eq!(wallet(Shape::WalletPayment, "", "Cash Out Tk 500"), TransactionType::Expense);
    assert_eq!(wallet(Shape::WalletPayment, "", "Send Money Tk 500"), TransactionType::Expense);
}

#[test]
fn test_wallet_cash_in_is_income() {
    let t = wallet(Shape::WalletCashIn, "01712345678", "Cash In Tk 500 from 01712345678 successful.");
    assert_eq!(t, TransactionType::Income);
}

#[test]
fn test_wallet_deposit_from_card_is_transfer_in() {
    let t = wallet(
        Shape::WalletDeposit,
        "VISA Card 4111",
        "You have received deposit of Tk 1,000.00 from VISA Card 4111.",
    );
    assert_eq!(t, TransactionType::InternalTransferIn);
}

#[test]
fn test_wallet_deposit_from_mixed_case_bank_name_is_transfer_in() {
    // Upper-case "EBL" routes the whole notice to the bank shapes instead
    let t = wallet(
        Shape::WalletDeposit,
        "Ebl Account",
        "You have received deposit of Tk 1,000.00 from Ebl Account.",
    );
    assert_eq!(t, TransactionType::InternalTransferIn);
}

#[test]
fn test_wallet_deposit_keyword_inside_name_is_income() {
    for source in ["Ricardo Das", "Debleena Roy", "Cardiff Traders"] {
        let t = wallet(
            Shape::WalletDeposit,
            source,
            &format!("You have received deposit of Tk 1,000.00 from {source}."),
        );
        assert_eq!(t, TransactionType::Income, "source: {source}");
    }
}

#[test]
fn test_wallet_deposit_from_other_is_income() {
    let t = wallet(
        Shape::WalletDeposit,
        "Remittance Co",
        "You have received deposit of Tk 1,000.00 from Remittance Co.",
    );
    assert_eq!(t, TransactionType::Income);
}

#[test]
fn test_wallet_to_bank_is_transfer_out() {
    let t = wallet(Shape::WalletPayment, "", "bKash to Bank Tk 3,000 successful");
    assert_eq!(t, TransactionType::InternalTransferOut);
}

#[test]
fn test_wallet_expense_rule_checked_first() {
    // A payment notice that also says "cash in" is still an expense
    let t = wallet(Shape::WalletPayment, "", "Payment for cash in service");
    assert_eq!(t, TransactionType::Expense);
}

#[test]
fn test_wallet_unmatched_is_unknown() {
    assert_eq!(wallet(Shape::WalletDeposit, "", "Tk 5 bonus"), TransactionType::Unknown);
}
