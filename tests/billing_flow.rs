use bill_split_rs::{
    process, Beneficiary, BillingError, BillingRequest, Config, ConfigStore, JsonFileStore, Money,
};

fn water_request() -> BillingRequest {
    BillingRequest {
        service: Some("3".to_string()),
        water_amount: Some("100.00".to_string()),
        waste_amount: Some("50.00".to_string()),
        period_range: Some("01/01/2024 to 31/01/2024".to_string()),
        consider_start: Some(true),
        due_date: Some("20/02/2024".to_string()),
        early_payment_date: Some("10/02/2024".to_string()),
        early_payment_discount: Some("15.00".to_string()),
        late_amount: Some("160".to_string()),
        ..Default::default()
    }
}

fn january_config() -> Config {
    Config {
        upper_unit_start_date: "10/01/2024".to_string(),
        lower_unit_start_date: "01/01/2024".to_string(),
    }
}

#[test]
fn test_water_and_waste_statement() {
    let outcome = process(&water_request(), january_config()).unwrap();

    let expected = "Water & Solid Waste\n\
        \n\
        Total: 150.00\n\
        Lower Unit: 150.00\n\
        Upper Unit: 106.45\n\
        \n\
        Period: 01/01/2024 TO 31/01/2024\n\
        \n\
        DUE DATE: 20/02/2024\n\
        \n\
        Make sure that the deposit is made before the due date.\n\
        \n\
        Discount distribution if paid before 10/02/2024:\n\
        Lower Unit: 15.00 (Water - 10.00, Solid Waste - 5.00)\n\
        Upper Unit: 10.65 (Water - 7.10, Solid Waste - 3.55)\n\
        \n\
        Total after discount:\n\
        Lower Unit: 135.00\n\
        Upper Unit: 95.80\n\
        \n\
        If payment is made after 20/02/2024, then the payment should be 160.00 CAD";
    assert_eq!(outcome.text, expected);

    let discount = outcome.discount.unwrap();
    assert_eq!(discount.components[0].discount, Money::from_major(10));
    assert_eq!(discount.components[1].discount, Money::from_major(5));
    assert_eq!(discount.after_discount(Beneficiary::Upper), Money::from_cents(9580));
}

#[test]
fn test_even_split_fallback() {
    let request = BillingRequest {
        service: Some("gas".to_string()),
        amount: Some("100.00".to_string()),
        period_from: Some("01/01/2024".to_string()),
        period_to: Some("31/01/2024".to_string()),
        consider_start: Some(false),
        due_date: Some("15/02/2024".to_string()),
        ..Default::default()
    };

    let outcome = process(&request, january_config()).unwrap();
    assert_eq!(outcome.statement.upper_amount, Money::from_major(50));
    assert_eq!(outcome.statement.lower_amount, Money::from_major(50));
    assert!(outcome.text.starts_with("Enbridge GAS\n\nTotal: 100.00\nLower Unit: 50.00\nUpper Unit: 50.00\n"));
    assert!(!outcome.text.contains("Discount distribution"));
    assert!(!outcome.text.contains("If payment is made after"));
}

#[test]
fn test_identical_requests_render_identically() {
    let first = process(&water_request(), january_config()).unwrap();
    let second = process(&water_request(), january_config()).unwrap();
    assert_eq!(first.text.as_bytes(), second.text.as_bytes());
}

#[test]
fn test_combined_service_requires_both_components() {
    let mut request = water_request();
    request.waste_amount = None;

    match process(&request, january_config()) {
        Err(BillingError::MissingRequiredField { field }) => assert_eq!(field, "waste_amount"),
        other => panic!("expected missing waste_amount, got {other:?}"),
    }
}

#[test]
fn test_considered_overrides_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("config.json"));

    let mut request = water_request();
    request.upper_start = Some("15/01/2024".to_string());

    let outcome = process(&request, store.load().unwrap()).unwrap();
    let updated = outcome.config.expect("upper start changed");
    store.save(&updated).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.upper_unit_start_date, "15/01/2024");
    // lower default untouched
    assert_eq!(reloaded.lower_unit_start_date, "14/02/2024");
}

#[test]
fn test_seeded_defaults_outside_period() {
    // seeded start dates fall after January: nothing is owed when prorating
    let mut request = water_request();
    request.early_payment_discount = None;

    let outcome = process(&request, Config::default()).unwrap();
    assert_eq!(outcome.statement.upper_amount, Money::ZERO);
    assert_eq!(outcome.statement.lower_amount, Money::ZERO);
    assert!(outcome.text.contains("Lower Unit: 0.00\nUpper Unit: 0.00"));
}
