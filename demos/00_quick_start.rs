/// quick start - amortize a loan and print its table
use fee_schedule_rs::{CompoundingFrequency, Loan, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000 at 18% TEA over 12 monthly payments
    let monthly = Rate::from_percentage(18).to_periodic(CompoundingFrequency::Monthly)?;
    let loan = Loan::new(Money::from_major(10_000), monthly, 12)?;

    println!("payment per period: {}", loan.payment_per_period().round_dp(2));
    println!("total paid:         {}", loan.total_amount_paid().round_dp(2));
    println!("total interest:     {}", loan.total_interest_paid().round_dp(2));

    println!("\nperiod  principal  interest  balance");
    for entry in loan.schedule() {
        println!(
            "{:>6}  {:>9}  {:>8}  {:>8}",
            entry.period,
            entry.principal_paid.round_dp(2),
            entry.interest_paid.round_dp(2),
            entry.remaining_balance.round_dp(2),
        );
    }

    Ok(())
}
