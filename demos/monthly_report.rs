use chrono::NaiveDate;
use expense_insights::*;

fn expense(y: i32, m: u32, d: u32, amount: f64, category: &str) -> ExpenseRecord {
    ExpenseRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), amount, category)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("📊 Expense Insights Demo\n");

    let records = vec![
        expense(2024, 1, 1, 1100.0, "Rent"),
        expense(2024, 1, 6, 84.20, "Groceries"),
        expense(2024, 1, 18, 32.50, "Dining"),
        expense(2024, 2, 1, 1100.0, "Rent"),
        expense(2024, 2, 9, 91.75, "Groceries"),
        expense(2024, 2, 14, 68.00, "Dining"),
        expense(2024, 3, 1, 1100.0, "Rent"),
        expense(2024, 3, 3, 97.10, "Groceries"),
        expense(2024, 3, 22, 45.00, "Transport"),
        expense(2024, 4, 1, 1150.0, "Rent"),
        expense(2024, 4, 12, 105.40, "Groceries"),
        expense(2024, 4, 27, 260.00, "Dining"),
        expense(2024, 5, 1, 1150.0, "Rent"),
        expense(2024, 5, 15, 118.30, "Groceries"),
        expense(2024, 6, 1, 1150.0, "Rent"),
        expense(2024, 6, 8, 121.90, "Groceries"),
        expense(2024, 6, 29, 540.00, "Dining"),
    ];

    let overview = SpendingOverview::from_records(&records);
    println!("💰 Total spend: ${:.2}", overview.total);
    println!("\n📋 By category:");
    for entry in &overview.by_category {
        println!("  {:<12} ${:>10.2}", entry.category, entry.total);
    }
    println!("\n📅 By month:");
    for entry in &overview.by_month {
        println!("  {}   ${:>10.2}", entry.month, entry.total);
    }

    let report = generate_insights(&records);

    println!("\n🔮 Per-category outlook:");
    for (category, insights) in &report.per_category {
        println!(
            "  {:<12} forecast ${:>9.2}  cap ${:>9.2}",
            category, insights.forecast_next, insights.suggested_cap
        );
        for note in &insights.notes {
            println!("      - {}", note);
        }
    }

    println!("\n💡 Suggestions:");
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion);
    }

    println!("\n🧾 JSON report:\n{}", report.to_json()?);

    Ok(())
}
