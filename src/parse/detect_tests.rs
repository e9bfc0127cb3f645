use super::*;

// ── Bank detection ────────────────────────────────────────────

#[test]
fn test_detect_bank_account_marker() {
    let msg = "AC 123***456 is debited with BDT 1,500.00 as POS Purchase";
    assert_eq!(detect_platform(msg), Some(Platform::BankCard));
}

#[test]
fn test_detect_bank_name() {
    assert_eq!(detect_platform("Dear EBL customer"), Some(Platform::BankCard));
}

#[test]
fn test_detect_bank_slash_account_marker() {
    let msg = "Cash WD BDT5,000.00 from ATM. Your A/C 123***456 Balance BDT 1.00";
    assert_eq!(detect_platform(msg), Some(Platform::BankCard));
}

#[test]
fn test_detect_bank_wins_over_wallet_vocabulary() {
    let msg = "Fund Transfer of BDT 2,000.00 from bKash. Your A/C 1***2 Balance BDT 5.00";
    assert_eq!(detect_platform(msg), Some(Platform::BankCard));
}

// ── Wallet detection ──────────────────────────────────────────

#[test]
fn test_detect_wallet_currency_marker() {
    assert_eq!(
        detect_platform("Payment Tk 200 to 01898765432 successful."),
        Some(Platform::MobileWallet)
    );
}

#[test]
fn test_detect_wallet_each_marker() {
    for msg in ["bKash offer", "Tk 5", "TrxID X1", "Cash In done", "Payment done"] {
        assert_eq!(detect_platform(msg), Some(Platform::MobileWallet), "{msg}");
    }
}

// ── No match ──────────────────────────────────────────────────

#[test]
fn test_detect_unrelated() {
    assert_eq!(detect_platform("Your OTP is 123456"), None);
}

#[test]
fn test_detect_empty() {
    assert_eq!(detect_platform(""), None);
}

#[test]
fn test_detect_is_case_sensitive() {
    // Markers are matched as sent; lowercase "ac " is ordinary prose
    assert_eq!(detect_platform("the ac unit is broken"), None);
    assert_eq!(detect_platform("bkash"), None);
}
