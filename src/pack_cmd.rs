//! Pack command: time text -> domain index.

use anyhow::{Context, Result};
use kalends_pattern::Adjustment;
use tracing::{debug, info_span};

use crate::cli::PackArgs;
use crate::session::Session;

pub fn run(session: &Session, args: PackArgs) -> Result<()> {
    let _cmd = info_span!("pack", domain = %args.domain).entered();
    let adjust = session.adjust(args.adjust);
    println!("{}", pack(session, &args.domain, &args.time, adjust)?);
    Ok(())
}

/// Returns the index of `text` in the domain labelled `label`.
pub fn pack(session: &Session, label: &str, text: &str, adjust: Adjustment) -> Result<i64> {
    let domain = session.domain(label)?;
    let time = domain
        .time_from_str(text, adjust)
        .with_context(|| format!("cannot pack {text:?} in domain {label:?}"))?;
    debug!(index = time.index(), time = %time, "packed");
    Ok(time.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_builtin_domains() {
        let session = Session::open(None).unwrap();
        assert_eq!(pack(&session, "day", "1970-01-01", Adjustment::None).unwrap(), 719_528);
        assert_eq!(pack(&session, "year", "2000", Adjustment::None).unwrap(), 2000);
        // Saturday 2000-01-01 is not a work day
        assert!(pack(&session, "workweek", "2000-01-01", Adjustment::None).is_err());
        let monday = pack(&session, "workweek", "2000-01-03", Adjustment::None).unwrap();
        assert_eq!(pack(&session, "workweek", "2000-01-01", Adjustment::Up).unwrap(), monday);
    }

    #[test]
    fn pack_error_names_input() {
        let session = Session::open(None).unwrap();
        let err = pack(&session, "day", "2000-13-01", Adjustment::None).unwrap_err();
        assert!(err.to_string().contains("\"2000-13-01\""));
    }
}
