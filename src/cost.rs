use bigdecimal::BigDecimal;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const SENTINEL: &str = "N/A";

/// Cost figure shown in a report.
#[derive(Debug, PartialEq, Clone)]
pub enum CostSummary {
    Amount(BigDecimal),
    Unavailable,
}

impl Display for CostSummary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CostSummary::Amount(amount) => write!(f, "{}", amount.round(2).with_scale(2)),
            CostSummary::Unavailable => write!(f, "{}", SENTINEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cost::CostSummary;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_display_pads_to_two_decimals() {
        let summary = CostSummary::Amount(BigDecimal::from_str("3.5").unwrap());
        assert_eq!(summary.to_string(), "3.50");
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let summary = CostSummary::Amount(BigDecimal::from_str("12.3456").unwrap());
        assert_eq!(summary.to_string(), "12.35");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(CostSummary::Amount(BigDecimal::from(0)).to_string(), "0.00");
    }

    #[test]
    fn test_display_unavailable() {
        assert_eq!(CostSummary::Unavailable.to_string(), "N/A");
    }
}
