use rusqlite::Connection;

use crate::Result;
use crate::records::{DailyCount, DomainCount, EmailSpan};

/// Distinct addresses, in whatever order the storage engine returns.
pub fn distinct_emails(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT email FROM user_history")?;

    let emails = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(emails)
}

/// Record counts per calendar day, ascending by day.
///
/// `DATE()` returns NULL for rows whose stored date is a raw fallback
/// string; those surface as a None day rather than disappearing.
pub fn counts_per_day(conn: &Connection) -> Result<Vec<DailyCount>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DATE(date) AS day, COUNT(*) AS total
        FROM user_history
        GROUP BY day
        ORDER BY day
        "#,
    )?;

    let counts = stmt
        .query_map([], |row| {
            Ok(DailyCount {
                day: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(counts)
}

/// First and last stored date per address (string MIN/MAX).
pub fn first_last_per_email(conn: &Connection) -> Result<Vec<EmailSpan>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT email, MIN(date) AS first_seen, MAX(date) AS last_seen
        FROM user_history
        GROUP BY email
        "#,
    )?;

    let spans = stmt
        .query_map([], |row| {
            Ok(EmailSpan {
                email: row.get(0)?,
                first: row.get(1)?,
                last: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(spans)
}

/// Totals per domain (substring after `@`), descending by count.
pub fn counts_per_domain(conn: &Connection) -> Result<Vec<DomainCount>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT SUBSTR(email, INSTR(email, '@') + 1) AS domain, COUNT(*) AS total
        FROM user_history
        GROUP BY domain
        ORDER BY total DESC
        "#,
    )?;

    let counts = stmt
        .query_map([], |row| {
            Ok(DomainCount {
                domain: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(counts)
}
