/// fee schedule - installment plans for a transaction fee, as JSON
use fee_schedule_rs::{FeeCalculator, FeeScheduleConfig};

const CONFIG: &str = r#"{
    "TEA": 0.36,
    "feeRate": 0.06,
    "DEFAULT_FEE_RATE": 0.05,
    "FEE_SCHEDULES": [
        { "quota": 1, "discountPercent": 0, "discountText": "Pago único" },
        { "quota": 6, "discountPercent": 5, "discountText": "5% de descuento" },
        { "quota": 12, "discountPercent": 10, "discountText": "10% de descuento" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = FeeCalculator::new(FeeScheduleConfig::from_json(CONFIG)?)?;

    println!("monthly rate: {}", calculator.periodic_rate());
    println!("default fee:  {}", calculator.calculate_default_fee(1000));

    let plans = calculator.generate_schedule_payments(1000);
    println!("{}", serde_json::to_string_pretty(&plans)?);

    // bad input never fails the page
    println!("{:?}", calculator.generate_schedule_payments("abc"));

    Ok(())
}
