use crate::store::{FetchOutcome, RateStore};
use std::io::{self, Write};

/// Interactive menu loop. Runs until the user exits or stdin closes.
pub async fn run(store: &mut RateStore) -> io::Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("\nSelect an option (1-5): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => convert_currency(store)?,
            "2" => view_rates(store),
            "3" => list_currencies(store),
            "4" => update_rates(store).await?,
            "5" => {
                println!("\nThank you for using Currency Converter!");
                break;
            }
            _ => println!("Invalid option. Please enter a number 1-5."),
        }
    }
    Ok(())
}

fn print_menu() {
    println!("\n{}", "=".repeat(50));
    println!("   CURRENCY CONVERTER");
    println!("{}", "=".repeat(50));
    println!("1. Convert Currency");
    println!("2. View Exchange Rates");
    println!("3. List All Currencies");
    println!("4. Update Rates");
    println!("5. Exit");
    println!("{}", "=".repeat(50));
}

// Returns None on EOF so the caller can bail out of the loop.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn convert_currency(store: &RateStore) -> io::Result<()> {
    let Some(raw) = prompt("\nEnter amount: ")? else {
        return Ok(());
    };
    let amount: f64 = match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            println!("Invalid input. Please enter a valid amount.");
            return Ok(());
        }
    };
    let Some(from) = prompt("From currency (e.g., USD): ")? else {
        return Ok(());
    };
    let Some(to) = prompt("To currency (e.g., EUR): ")? else {
        return Ok(());
    };

    match store.snapshot().convert(amount, &from, &to) {
        Ok(result) => println!(
            "\n{} {} = {:.2} {}",
            amount,
            from.to_uppercase(),
            result,
            to.to_uppercase()
        ),
        Err(err) => println!("Conversion failed: {}.", err),
    }
    Ok(())
}

fn view_rates(store: &RateStore) {
    let snapshot = store.snapshot();
    if snapshot.rates.is_empty() {
        println!("\nNo rates loaded yet. Use option 4 to update.");
        return;
    }

    println!("\nExchange rates for {}:", snapshot.base);
    println!("{}", "-".repeat(40));
    let mut codes: Vec<&String> = snapshot.rates.keys().collect();
    codes.sort();
    for code in codes {
        println!("  {}: {:.4}", code, snapshot.rates[code]);
    }
    match snapshot.last_updated {
        Some(ts) => println!("\n  (Last updated: {})", ts.format("%Y-%m-%d %H:%M:%S")),
        None => println!("\n  (Last updated: never, offline rates)"),
    }
}

fn list_currencies(store: &RateStore) {
    let currencies = store.snapshot().currencies();
    println!("\n{} currencies supported:", currencies.len());
    println!("{}", "-".repeat(40));
    for (i, code) in currencies.iter().enumerate() {
        print!("  {}", code);
        if (i + 1) % 10 == 0 {
            println!();
        }
    }
    println!();
}

async fn update_rates(store: &mut RateStore) -> io::Result<()> {
    let current = store.snapshot().base.clone();
    let input = prompt(&format!("\nBase currency [{}]: ", current))?;
    let base = match input {
        Some(code) if !code.is_empty() => code,
        _ => current,
    };

    println!("Updating exchange rates...");
    match store.fetch(&base).await {
        FetchOutcome::Fetched => {
            println!("Rates updated successfully (base: {}).", store.snapshot().base);
        }
        FetchOutcome::Fallback(_) => {
            println!("Could not update rates. Check your connection; using offline rates.");
        }
    }
    Ok(())
}
