//! Risk identifier formatting.
//!
//! Records are numbered sequentially from 1 in generation order:
//! `RISK-1`, `RISK-2`, ... `RISK-N`.

/// Prefix shared by every risk identifier.
pub const PREFIX_RISK: &str = "RISK";

/// Format the identifier for the record at zero-based `index`.
#[must_use]
pub fn risk_id(index: usize) -> String {
    format!("{PREFIX_RISK}-{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        assert_eq!(risk_id(0), "RISK-1");
        assert_eq!(risk_id(19), "RISK-20");
    }
}
