//! Normalization of raw bookmaker odds strings.
//!
//! Bookmaker feeds quote decimal odds as locale-formatted strings, commonly
//! with a comma decimal separator ("2,10"). Normalization converts a raw
//! three-element record into a validated [`OddsTriple`].

use crate::error::OddsError;
use crate::odds::OddsTriple;

/// Parse three raw odds strings into a validated triple.
///
/// Accepts either a dot or a comma as the decimal separator. Fails if the
/// input does not hold exactly three elements, any element is non-numeric,
/// or any parsed value is not a positive finite number. Callers treat a
/// failure as "no arbitrage signal" for the fixture, never as a crash.
pub fn normalize_odds(raw: &[String]) -> Result<OddsTriple, OddsError> {
    if raw.len() != 3 {
        return Err(OddsError::WrongLegCount {
            expected: 3,
            got: raw.len(),
        });
    }

    let mut values = [0.0f64; 3];
    for (slot, raw_value) in values.iter_mut().zip(raw) {
        *slot = raw_value
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| OddsError::NotANumber {
                raw: raw_value.clone(),
            })?;
    }

    OddsTriple::new(values[0], values[1], values[2])
}
