mod amount;
mod detect;
mod shapes;
mod timestamp;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::categorize::{Categorizer, Clues};
use crate::models::{Platform, TransactionRecord};

pub(crate) use amount::format_amount;
pub(crate) use detect::detect_platform;
pub(crate) use timestamp::Clock;

use shapes::{rules_for, ShapeRule};

/// Turns notice text into transaction records.
///
/// Holds only compiled patterns and the configured zone, so a single parser
/// can be shared freely between callers.
pub(crate) struct SmsParser {
    tz: Tz,
    clock: Clock,
    categorizer: Categorizer,
    bank: Vec<ShapeRule>,
    wallet: Vec<ShapeRule>,
}

impl SmsParser {
    pub(crate) fn new(tz: Tz) -> Result<Self> {
        Self::with_clock(tz, Utc::now)
    }

    pub(crate) fn with_clock(tz: Tz, clock: Clock) -> Result<Self> {
        Ok(Self {
            tz,
            clock,
            categorizer: Categorizer::new()?,
            bank: rules_for(Platform::BankCard)?,
            wallet: rules_for(Platform::MobileWallet)?,
        })
    }

    pub(crate) fn timezone(&self) -> Tz {
        self.tz
    }

    /// Current date in the configured zone.
    pub(crate) fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub(crate) fn now(&self) -> DateTime<Tz> {
        (self.clock)().with_timezone(&self.tz)
    }

    /// Parse one notice. `None` means the text is not a known transaction
    /// notice, which is the common case and not an error.
    pub(crate) fn parse(&self, message: &str) -> Option<TransactionRecord> {
        let message = message.trim();
        let platform = detect_platform(message)?;
        let rules = match platform {
            Platform::BankCard => &self.bank,
            Platform::MobileWallet => &self.wallet,
        };

        let (rule, extraction) = rules
            .iter()
            .find_map(|rule| rule.extract(message).map(|e| (rule, e)))?;

        let description = extraction.description();
        let transaction_type = self.categorizer.categorize(
            extraction.shape,
            &Clues {
                verb: &extraction.verb,
                counterparty: &extraction.counterparty,
                description: &description,
                message,
            },
        );
        let (timestamp, timestamp_source) =
            timestamp::resolve(&extraction.date_text, rule.date_format, self.tz, self.clock);

        Some(TransactionRecord {
            platform,
            shape: extraction.shape,
            transaction_type,
            raw_type: extraction.raw_type(),
            amount: extraction.amount,
            balance: extraction.balance,
            fee: extraction.fee,
            description,
            transaction_id: extraction.transaction_id,
            timestamp,
            timestamp_source,
            raw_message: message.to_string(),
        })
    }
}
