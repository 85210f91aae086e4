use amount_math::{Amount, Currency, CurrencySpecification};

fn euro() -> CurrencySpecification {
    CurrencySpecification {
        name: "Euro".into(),
        num_fractional_input_digits: 2,
        num_fractional_normal_digits: 2,
        num_fractional_trailing_zero_digits: 2,
        alt_unit_names: [(0, "€".to_string()), (-2, "ct".to_string())]
            .into_iter()
            .collect(),
    }
}

#[test]
fn test_amount_as_canonical_string() -> anyhow::Result<()> {
    let amount = Amount::new(Currency::new("USD")?, 3, 50_000_000)?;
    let json = serde_json::to_string(&amount)?;
    assert_eq!(json, "\"USD:3.5\"");

    let back: Amount = serde_json::from_str(&json)?;
    assert_eq!(back, amount);

    assert!(serde_json::from_str::<Amount>("\"USD:bad\"").is_err());
    assert!(serde_json::from_str::<Amount>("3.5").is_err());
    Ok(())
}

#[test]
fn test_display_metadata_is_not_serialized() -> anyhow::Result<()> {
    let amount = Amount::from_json_string("EUR:1.25")?.with_spec(Some(euro()));
    assert_eq!(serde_json::to_string(&amount)?, "\"EUR:1.25\"");

    let back: Amount = serde_json::from_str("\"EUR:1.25\"")?;
    assert!(back.spec().is_none());
    Ok(())
}

#[test]
fn test_currency_specification_field_names() -> anyhow::Result<()> {
    let json = r#"{
        "name": "Euro",
        "num_fractional_input_digits": 2,
        "num_fractional_normal_digits": 2,
        "num_fractional_trailing_zero_digits": 2,
        "alt_unit_names": {"0": "€", "-2": "ct"}
    }"#;
    let spec: CurrencySpecification = serde_json::from_str(json)?;
    assert_eq!(spec, euro());
    assert_eq!(spec.symbol(), Some("€"));
    Ok(())
}
