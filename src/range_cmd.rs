//! Range command: list the times between two bounds.

use anyhow::{Context, Result};
use kalends_pattern::Adjustment;
use kalends_time::Range;
use tracing::{info, info_span};

use crate::cli::RangeArgs;
use crate::session::Session;

pub fn run(session: &Session, args: RangeArgs) -> Result<()> {
    let _cmd = info_span!("range", domain = %args.domain).entered();
    let adjust = session.adjust(args.adjust);
    let range = build_range(session, &args.domain, &args.first, &args.last, adjust)?;
    info!(len = range.len(), "range built");
    println!("{range}");
    for time in range.iter().take(args.limit.unwrap_or(usize::MAX)) {
        println!("{time}");
    }
    Ok(())
}

/// Packs both bounds and builds the range between them.
///
/// Adjustment `up` applies to the first bound and `down` to the last, so the
/// range never grows past the requested text.
pub fn build_range(
    session: &Session,
    label: &str,
    first: &str,
    last: &str,
    adjust: Adjustment,
) -> Result<Range> {
    let domain = session.domain(label)?;
    let (first_adjust, last_adjust) = match adjust {
        Adjustment::None => (Adjustment::None, Adjustment::None),
        _ => (Adjustment::Up, Adjustment::Down),
    };
    let first = domain
        .time_from_str(first, first_adjust)
        .with_context(|| format!("invalid first bound {first:?}"))?;
    let last = domain
        .time_from_str(last, last_adjust)
        .with_context(|| format!("invalid last bound {last:?}"))?;
    Ok(Range::new(&first, &last)?)
}
