//! Compare command: order two times from possibly different domains.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use kalends_pattern::Adjustment;
use tracing::info_span;

use crate::cli::CompareArgs;
use crate::session::Session;

pub fn run(session: &Session, args: CompareArgs) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let ordering = compare(
        session,
        (&args.left_domain, &args.left),
        (&args.right_domain, &args.right),
    )?;
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{symbol}");
    Ok(())
}

/// Packs each `(label, text)` pair without adjustment and orders them.
pub fn compare(session: &Session, left: (&str, &str), right: (&str, &str)) -> Result<Ordering> {
    let [a, b] = [left, right].map(|(label, text)| {
        session.domain(label).and_then(|d| {
            d.time_from_str(text, Adjustment::None)
                .with_context(|| format!("cannot pack {text:?} in domain {label:?}"))
        })
    });
    Ok(a?.compare(&b?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_across_resolutions() {
        let session = Session::open(None).unwrap();
        assert_eq!(
            compare(&session, ("month", "2000-01"), ("day", "2000-01-01")).unwrap(),
            Ordering::Equal
        );
        assert_eq!(
            compare(&session, ("day", "2000-01-02"), ("hour", "2000-01-01 23")).unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            compare(&session, ("workweek", "2000-01-03"), ("day", "2000-01-04")).unwrap(),
            Ordering::Less
        );
    }
}
