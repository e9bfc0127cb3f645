//! Ordered notice templates for each platform.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use super::amount::parse_amount;
use super::timestamp::DateFormat;
use crate::models::{Platform, Shape};

const AMOUNT: &str = r"[\d,]+(?:\.\d{2})?";
const MASKED: &str = r"\d+\*+\d+";
const BANK_DATE: &str = r"\d{2}-[A-Z]{3}-\d{2}\s+\d{2}:\d{2}:\d{2}\s+[AP]M";
const WALLET_DATE: &str = r"\d{2}/\d{2}/\d{4}\s+\d{2}:\d{2}";

/// Fields pulled out of a notice by one shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Extraction {
    pub(crate) shape: Shape,
    /// Lowercased verb, e.g. "debited" or "cash wd".
    pub(crate) verb: String,
    pub(crate) amount: Decimal,
    pub(crate) balance: Decimal,
    pub(crate) fee: Option<Decimal>,
    /// Counterparty, location, or source as written in the notice.
    pub(crate) counterparty: String,
    pub(crate) reference: Option<String>,
    pub(crate) date_text: String,
    pub(crate) transaction_id: Option<String>,
}

impl Extraction {
    pub(crate) fn description(&self) -> String {
        match self.shape {
            Shape::BankDebitCredit => self.counterparty.clone(),
            Shape::BankCashWithdrawal => format!("Cash WD from {}", self.counterparty),
            Shape::BankFundTransfer => format!("Fund Transfer from {}", self.counterparty),
            Shape::WalletDeposit => format!("Deposit from {}", self.counterparty),
            Shape::WalletCashIn => format!("Cash In from {}", self.counterparty),
            Shape::WalletPayment => match &self.reference {
                Some(r) => format!("Payment to {} - {r}", self.counterparty),
                None => format!("Payment to {}", self.counterparty),
            },
        }
    }

    pub(crate) fn raw_type(&self) -> String {
        match self.shape {
            Shape::BankDebitCredit => format!("EBL {}", self.verb),
            Shape::BankCashWithdrawal => "EBL Cash Withdrawal".into(),
            Shape::BankFundTransfer => "EBL Fund Transfer".into(),
            Shape::WalletDeposit => "bKash Deposit".into(),
            Shape::WalletCashIn => "bKash Cash In".into(),
            Shape::WalletPayment => "bKash Payment".into(),
        }
    }
}

pub(crate) struct ShapeRule {
    pub(crate) shape: Shape,
    pub(crate) date_format: DateFormat,
    regex: Regex,
}

impl ShapeRule {
    fn new(shape: Shape, date_format: DateFormat, pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .with_context(|| format!("Invalid pattern for shape {shape}"))?;
        Ok(Self {
            shape,
            date_format,
            regex,
        })
    }

    /// Try this shape against a message. A numeric field that does not parse
    /// counts as no match.
    pub(crate) fn extract(&self, message: &str) -> Option<Extraction> {
        let caps = self.regex.captures(message)?;
        let fee = match caps.name("fee") {
            Some(m) => Some(parse_amount(m.as_str()).ok()?),
            None => None,
        };

        Some(Extraction {
            shape: self.shape,
            verb: verb_for(self.shape, &caps),
            amount: parse_amount(&caps["amount"]).ok()?,
            balance: parse_amount(&caps["balance"]).ok()?,
            fee,
            counterparty: caps["party"].trim().to_string(),
            reference: caps
                .name("reference")
                .map(|m| m.as_str().trim().to_string())
                .filter(|r| !r.is_empty()),
            date_text: caps["date"].to_string(),
            transaction_id: caps.name("trx").map(|m| m.as_str().to_string()),
        })
    }
}

fn verb_for(shape: Shape, caps: &Captures<'_>) -> String {
    match shape {
        Shape::BankDebitCredit => caps
            .name("verb")
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default(),
        Shape::BankCashWithdrawal => "cash wd".into(),
        Shape::BankFundTransfer => "fund transfer".into(),
        Shape::WalletDeposit => "received deposit".into(),
        Shape::WalletCashIn => "cash in".into(),
        Shape::WalletPayment => "payment".into(),
    }
}

/// Compile the rules for a platform, most specific first. Order matters:
/// only the first matching rule is used.
pub(crate) fn rules_for(platform: Platform) -> Result<Vec<ShapeRule>> {
    match platform {
        Platform::BankCard => bank_rules(),
        Platform::MobileWallet => wallet_rules(),
    }
}

fn bank_rules() -> Result<Vec<ShapeRule>> {
    let card_tail = format!(
        r"\s*\.\s*Card\s+{MASKED}\s+on\s+(?P<date>{BANK_DATE}(?:\s+[A-Z]{{2,5}})?)\s*\.\s*Your\s+A/C\s+{MASKED}\s+Balance\s+BDT\s*(?P<balance>{AMOUNT})"
    );

    Ok(vec![
        ShapeRule::new(
            Shape::BankDebitCredit,
            DateFormat::DayMonthNameYear,
            &format!(
                r"AC\s+{MASKED}\s+is\s+(?P<verb>debited|credited)\s+with\s+BDT\s*(?P<amount>{AMOUNT})\s+as\s+(?P<party>.+?)\s+on\s+(?P<date>{BANK_DATE})\s+Balance\s+is\s+BDT\s*(?P<balance>{AMOUNT})"
            ),
        )?,
        ShapeRule::new(
            Shape::BankCashWithdrawal,
            DateFormat::DayMonthNameYearZoned,
            &format!(r"Cash\s+WD\s+BDT\s*(?P<amount>{AMOUNT})\s+from\s+(?P<party>.+?){card_tail}"),
        )?,
        ShapeRule::new(
            Shape::BankFundTransfer,
            DateFormat::DayMonthNameYearZoned,
            &format!(
                r"Fund\s+Transfer\s+of\s+BDT\s*(?P<amount>{AMOUNT})\s+from\s+(?P<party>.+?){card_tail}"
            ),
        )?,
    ])
}

fn wallet_rules() -> Result<Vec<ShapeRule>> {
    let tail = format!(
        r"Fee\s+Tk\s*(?P<fee>{AMOUNT})\.\s+Balance\s+Tk\s*(?P<balance>{AMOUNT})\.\s+TrxID\s+(?P<trx>\w+)\s+at\s+(?P<date>{WALLET_DATE})"
    );

    Ok(vec![
        ShapeRule::new(
            Shape::WalletDeposit,
            DateFormat::DayMonthYearNumeric,
            &format!(
                r"You\s+have\s+received\s+deposit\s+of\s+Tk\s*(?P<amount>{AMOUNT})\s+from\s+(?P<party>.+?)\.\s+{tail}"
            ),
        )?,
        ShapeRule::new(
            Shape::WalletCashIn,
            DateFormat::DayMonthYearNumeric,
            &format!(
                r"Cash\s+In\s+Tk\s*(?P<amount>{AMOUNT})\s+from\s+(?P<party>\d+)\s+successful\.\s+{tail}"
            ),
        )?,
        ShapeRule::new(
            Shape::WalletPayment,
            DateFormat::DayMonthYearNumeric,
            &format!(
                r"Payment\s+Tk\s*(?P<amount>{AMOUNT})\s+to\s+(?P<party>\d+)\s+successful\.\s+(?:Ref\s+(?P<reference>.+?)\.\s+)?{tail}"
            ),
        )?,
    ])
}

#[cfg(test)]
#[path = "shapes_tests.rs"]
mod tests;
