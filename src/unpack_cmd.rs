//! Unpack command: domain index -> time text.

use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::UnpackArgs;
use crate::session::Session;

pub fn run(session: &Session, args: UnpackArgs) -> Result<()> {
    let _cmd = info_span!("unpack", domain = %args.domain).entered();
    println!("{}", unpack(session, &args.domain, args.index)?);
    Ok(())
}

/// Formats the time at `index`, with its weekday for day-or-finer domains.
pub fn unpack(session: &Session, label: &str, index: i64) -> Result<String> {
    let domain = session.domain(label)?;
    let time = domain
        .time(index)
        .with_context(|| format!("cannot unpack index {index} in domain {label:?}"))?;
    Ok(match time.day_of_week() {
        Ok(weekday) => format!("{time} ({weekday})"),
        Err(_) => time.to_string(),
    })
}
