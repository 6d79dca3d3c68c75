use anyhow::Result;
use mailtrace_index::Database;
use owo_colors::OwoColorize;

/// Print the four aggregate sections in fixed order. Read-only.
pub fn print_report(db: &Database) -> Result<()> {
    println!();
    println!("{}", "=== Unique Email Addresses ===".bold());
    for email in db.distinct_emails()? {
        println!("{}", email);
    }

    println!();
    println!("{}", "=== Email Count Per Day ===".bold());
    for daily in db.counts_per_day()? {
        // DATE() yields no day for raw fallback strings; keep those rows
        // visible instead of folding them away.
        let day = daily.day.unwrap_or_else(|| "(unparsed)".to_string());
        println!("{}: {} emails", day, daily.count);
    }

    println!();
    println!("{}", "=== First and Last Email Date per Address ===".bold());
    for span in db.first_last_per_email()? {
        println!("{} -> First: {}, Last: {}", span.email, span.first, span.last);
    }

    println!();
    println!("{}", "=== Email Count by Domain ===".bold());
    for domain in db.counts_per_domain()? {
        println!("{}: {} emails", domain.domain, domain.count);
    }

    Ok(())
}
