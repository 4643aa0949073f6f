//! Payoff variant definitions.
//!
//! This module provides the four payoff variants supported by the engine
//! together with their terminal payoff functions and canonical text names.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Type of option payoff.
///
/// The set is closed: every pricing path matches exhaustively, so an
/// unsupported variant can only arise where text enters the system
/// ([`OptionType::from_str`]).
///
/// # Variants
/// - `EuropeanCall`: max(S - K, 0)
/// - `EuropeanPut`: max(K - S, 0)
/// - `BinaryCall`: cash-or-nothing, 1 if S > K else 0
/// - `DigitalPut`: cash-or-nothing, 1 if S < K else 0
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "EUROPEAN_CALL".parse().unwrap();
/// assert_eq!(call, OptionType::EuropeanCall);
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(call.to_string(), "EUROPEAN_CALL");
///
/// assert!("AMERICAN_CALL".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    EuropeanCall,
    /// Put option: max(K - S, 0)
    EuropeanPut,
    /// Binary call: 1 if S > K else 0
    BinaryCall,
    /// Digital put: 1 if S < K else 0
    DigitalPut,
}

impl OptionType {
    /// All variants in canonical order.
    pub const ALL: [OptionType; 4] = [
        OptionType::EuropeanCall,
        OptionType::EuropeanPut,
        OptionType::BinaryCall,
        OptionType::DigitalPut,
    ];

    /// Canonical upper-case name, as used in CSV rows and logs.
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::EuropeanCall => "EUROPEAN_CALL",
            OptionType::EuropeanPut => "EUROPEAN_PUT",
            OptionType::BinaryCall => "BINARY_CALL",
            OptionType::DigitalPut => "DIGITAL_PUT",
        }
    }

    /// Evaluate the terminal payoff for a given underlying price and strike.
    ///
    /// Digital variants pay one unit of cash; the comparison is strict, so a
    /// terminal price exactly at the strike pays nothing.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::EuropeanPut.payoff(90.0, 100.0), 10.0);
    /// assert_eq!(OptionType::BinaryCall.payoff(100.0, 100.0), 0.0);
    /// assert_eq!(OptionType::DigitalPut.payoff(99.0, 100.0), 1.0);
    /// ```
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::EuropeanCall => (terminal - strike).max(0.0),
            OptionType::EuropeanPut => (strike - terminal).max(0.0),
            OptionType::BinaryCall => {
                if terminal > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::DigitalPut => {
                if terminal < strike {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Returns whether this payoff is digital (BinaryCall or DigitalPut).
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, OptionType::BinaryCall | OptionType::DigitalPut)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses a canonical name; surrounding whitespace and letter case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        OptionType::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                PricingError::invalid_argument(format!("unsupported option type: {trimmed}"))
            })
    }
}
