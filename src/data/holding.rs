//! Holding Module
//! Portfolio positions and their derived monetary values.

/// One portfolio position.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    /// Ticker or symbol, used as the slice label
    pub name: String,
    pub units: f64,
    /// Most recent known price per unit
    pub last_price: f64,
}

impl Holding {
    pub fn new(name: impl Into<String>, units: f64, last_price: f64) -> Self {
        Self {
            name: name.into(),
            units,
            last_price,
        }
    }

    /// Monetary value of the position. Always recomputed, never stored.
    pub fn value(&self) -> f64 {
        self.units * self.last_price
    }
}

/// The fixed list of holdings charted by this program.
pub fn portfolio() -> Vec<Holding> {
    vec![
        Holding::new("GOLDBEES", 690.0, 91.26),
        Holding::new("SILVERBEES", 10.0, 123.66),
        Holding::new("TCS", 1.0, 3134.05),
        Holding::new("WAAREEENER", 13.0, 3634.5),
    ]
}

/// Value of every holding, in input order.
///
/// Duplicate names are not merged and nothing is validated: negative or
/// zero inputs pass straight through.
pub fn compute_values(holdings: &[Holding]) -> Vec<f64> {
    holdings.iter().map(Holding::value).collect()
}

/// Slice labels, parallel to [`compute_values`].
pub fn labels(holdings: &[Holding]) -> Vec<String> {
    holdings.iter().map(|h| h.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_portfolio_values() {
        let values = compute_values(&portfolio());
        let expected = [62969.4, 1236.6, 3134.05, 47248.5];

        assert_eq!(values.len(), expected.len());
        for (v, e) in values.iter().zip(expected.iter()) {
            assert_relative_eq!(*v, *e, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_portfolio_total() {
        let total: f64 = compute_values(&portfolio()).iter().sum();
        assert_relative_eq!(total, 114588.55, epsilon = 1e-6);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let holdings = vec![
            Holding::new("B", 2.0, 5.0),
            Holding::new("A", 1.0, 1.0),
            Holding::new("C", 3.0, 0.5),
        ];
        let values = compute_values(&holdings);

        assert_eq!(values, vec![10.0, 1.0, 1.5]);
        assert_eq!(labels(&holdings), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicate_names_not_merged() {
        let holdings = vec![Holding::new("TCS", 1.0, 10.0), Holding::new("TCS", 2.0, 10.0)];
        assert_eq!(compute_values(&holdings), vec![10.0, 20.0]);
    }

    #[test]
    fn test_idempotent() {
        let holdings = portfolio();
        let first = compute_values(&holdings);
        let second = compute_values(&holdings);

        assert_eq!(first, second);
        assert_eq!(holdings, portfolio());
    }

    #[test]
    fn test_zero_units() {
        let holdings = vec![Holding::new("EMPTY", 0.0, 250.0), Holding::new("FULL", 4.0, 25.0)];
        assert_eq!(compute_values(&holdings), vec![0.0, 100.0]);
    }

    #[test]
    fn test_negative_passes_through() {
        let holdings = vec![Holding::new("SHORT", -5.0, 10.0)];
        assert_eq!(compute_values(&holdings), vec![-50.0]);
    }

    #[test]
    fn test_empty() {
        assert!(compute_values(&[]).is_empty());
    }
}
