//! Domains command: list the registered domains.

use anyhow::Result;
use kalends_time::TimeDomain;
use tracing::info_span;

use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let _cmd = info_span!("domains").entered();
    for line in describe(session) {
        println!("{line}");
    }
    Ok(())
}

/// One line per label: label, resolution, first and last time.
pub fn describe(session: &Session) -> Vec<String> {
    session
        .registry
        .labels()
        .into_iter()
        .map(|(label, domain)| format!("{label:<16} {}", summary(&domain)))
        .collect()
}

fn summary(domain: &TimeDomain) -> String {
    let first = domain.unpack(0).map(|p| domain.format(&p));
    let last = domain.unpack(domain.max_index()).map(|p| domain.format(&p));
    match (first, last) {
        (Ok(first), Ok(last)) => format!("{:<6} {first} .. {last}", domain.resolution().name()),
        _ => domain.resolution().to_string(),
    }
}
