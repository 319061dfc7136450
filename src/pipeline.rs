// src/pipeline.rs
//! Stream decoding, validity filtering, and the render loop

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use tracing::{debug, warn};

use crate::render::LineRenderer;
use crate::types::CertificateRecord;

/// Timestamp layout used by crt.sh for `not_before`/`not_after`.
const VALIDITY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decode a buffered crt.sh response body and render each surviving record.
///
/// The body is a concatenation of zero or more top-level JSON arrays rather
/// than one well-formed document, so arrays are decoded one at a time until
/// the input is exhausted. Records are rendered strictly in arrival order.
/// Returns the number of rendered records.
///
/// A decode error is fatal and aborts all remaining arrays; a render failure
/// on one record is logged and the run continues with the next.
pub fn process_body<W: Write>(
    body: &[u8],
    renderer: &LineRenderer,
    only_valid: bool,
    out: &mut W,
) -> Result<u64> {
    let mut rendered = 0u64;
    let stream =
        serde_json::Deserializer::from_slice(body).into_iter::<Vec<CertificateRecord>>();

    for chunk in stream {
        let records = match chunk {
            Ok(records) => records,
            Err(err) => {
                debug!("Data: {}", String::from_utf8_lossy(body));
                return Err(err).context("error decoding certificate list");
            }
        };

        for record in records {
            if only_valid && !still_valid(&record, Local::now().naive_local()) {
                continue;
            }

            if let Err(err) = renderer.render_to(&record, out) {
                warn!("Unable to format line: {err:#}");
                continue;
            }

            rendered += 1;
        }
    }

    Ok(rendered)
}

/// Check whether a record's validity window has not yet ended at `now`.
///
/// An unparsable `not_after` counts as not valid; the record is skipped
/// rather than aborting the run. The comparison is naive on both sides,
/// matching the timezone-less upstream timestamps.
fn still_valid(record: &CertificateRecord, now: NaiveDateTime) -> bool {
    match NaiveDateTime::parse_from_str(&record.not_after, VALIDITY_FORMAT) {
        Ok(not_after) => not_after >= now,
        Err(err) => {
            debug!("Failed to parse time: {} ({err})", record.not_after);
            false
        }
    }
}
