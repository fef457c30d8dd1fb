//! Behavior-driven tests for rejected input
//!
//! Every rejected call returns a `ValidationError` with a readable reason and
//! leaves the market usable and unchanged.

use gbce_core::Side;
use gbce_tests::{fresh_market, ValidationError};

// =============================================================================
// Unknown Stocks
// =============================================================================

#[test]
fn when_stock_unknown_every_operation_reports_it() {
    let (mut market, _) = fresh_market();

    let cases = [
        market.dividend_yield("XYZ", 10.0).map(|_| ()),
        market.pe_ratio("XYZ", 10.0).map(|_| ()),
        market.volume_weighted_price("XYZ").map(|_| ()),
    ];
    for result in cases {
        let err = result.expect_err("unknown stock");
        assert!(err.reason().contains("unknown stock 'XYZ'"), "{err}");
    }

    let err = market
        .record_trade("XYZ", 1, 10.0, Side::Buy)
        .expect_err("unknown stock");
    assert!(matches!(err, ValidationError::UnknownStock { .. }));
}

#[test]
fn when_invalid_trade_rejected_market_remains_usable() {
    // Given: A trade against an unlisted stock
    let (mut market, _) = fresh_market();
    let result = market.record_trade("invalid", 1, 100.0, Side::Buy);

    // Then: It fails, the ledger stays empty, and queries still work
    assert!(matches!(result, Err(ValidationError::UnknownStock { .. })));
    assert!(market.ledger().is_empty());
    assert_eq!(market.volume_weighted_price("POP").expect("listed"), 0.0);

    market.record_trade("POP", 1, 100.0, Side::Buy).expect("trade");
    assert_eq!(market.ledger().len(), 1);
}

#[test]
fn when_identifier_has_surrounding_whitespace_it_is_not_listed() {
    // Given: Identifiers that differ from a listed stock only by padding
    let (mut market, _) = fresh_market();

    for identifier in [" POP ", "\tpop\n", "POP "] {
        // When: A trade is recorded against it
        let result = market.record_trade(identifier, 1, 10.0, Side::Buy);

        // Then: It is an unknown stock and nothing is appended
        assert_eq!(
            result,
            Err(ValidationError::UnknownStock {
                symbol: identifier.to_owned()
            })
        );
        assert!(matches!(
            market.volume_weighted_price(identifier),
            Err(ValidationError::UnknownStock { .. })
        ));
    }
    assert!(market.ledger().is_empty());
}

// =============================================================================
// Non-Positive Values
// =============================================================================

#[test]
fn when_price_not_positive_formulas_fail() {
    let (market, _) = fresh_market();

    for price in [0.0, -10.0, f64::NAN] {
        assert!(matches!(
            market.dividend_yield("POP", price),
            Err(ValidationError::InvalidPrice { .. })
        ));
        assert!(matches!(
            market.pe_ratio("TEA", price),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }
}

#[test]
fn when_quantity_or_price_not_positive_trade_is_rejected_without_mutation() {
    let (mut market, _) = fresh_market();
    market.record_trade("ALE", 1, 5.0, Side::Buy).expect("trade");

    let rejected = [
        market.record_trade("ALE", 0, 5.0, Side::Buy),
        market.record_trade("ALE", -3, 5.0, Side::Sell),
        market.record_trade("ALE", 1, 0.0, Side::Buy),
        market.record_trade("ALE", 1, -5.0, Side::Sell),
    ];

    assert!(matches!(rejected[0], Err(ValidationError::InvalidQuantity { value: 0 })));
    assert!(matches!(rejected[1], Err(ValidationError::InvalidQuantity { value: -3 })));
    assert!(matches!(rejected[2], Err(ValidationError::InvalidPrice { .. })));
    assert!(matches!(rejected[3], Err(ValidationError::InvalidPrice { .. })));
    assert_eq!(market.ledger().len(), 1);
    assert_eq!(market.volume_weighted_price("ALE").expect("listed"), 5.0);
}

#[test]
fn when_quantity_invalid_reason_names_the_value() {
    let (mut market, _) = fresh_market();

    let err = market
        .record_trade("POP", -7, 1.0, Side::Buy)
        .expect_err("negative quantity");
    assert_eq!(err.reason(), "invalid quantity -7, must be greater than zero");
}
