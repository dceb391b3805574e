/// water & solid waste - full request with early-payment discount
use bill_split_rs::{process, BillingRequest, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = BillingRequest {
        service: Some("3".to_string()),
        water_amount: Some("100.00".to_string()),
        waste_amount: Some("50.00".to_string()),
        period_range: Some("01/02/2024 to 29/02/2024".to_string()),
        consider_start: Some(true),
        due_date: Some("20/03/2024".to_string()),
        early_payment_date: Some("10/03/2024".to_string()),
        early_payment_discount: Some("15.00".to_string()),
        ..Default::default()
    };

    // seeded defaults: upper from 01/02, lower from 14/02
    let outcome = process(&request, Config::default())?;
    println!("{}", outcome.text);

    Ok(())
}
