use crate::models::Platform;

/// Substrings that mark a bank notice: the bank's name or an account marker.
const BANK_MARKERS: &[&str] = &["EBL", "AC ", "A/C "];

/// Substrings that mark a wallet notice.
const WALLET_MARKERS: &[&str] = &["bKash", "Tk ", "TrxID", "Cash In", "Payment"];

/// Cheap lexical pre-filter deciding which platform's shapes to try.
/// Bank markers win when both vocabularies are present.
pub(crate) fn detect_platform(message: &str) -> Option<Platform> {
    if BANK_MARKERS.iter().any(|m| message.contains(m)) {
        return Some(Platform::BankCard);
    }
    if WALLET_MARKERS.iter().any(|m| message.contains(m)) {
        return Some(Platform::MobileWallet);
    }
    None
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
