//! Tolerant NFC tag matching.
//!
//! Real readers disagree on separators, case and byte order, so a scanned
//! tag is compared against the registered one through a small set of tagged
//! candidates instead of ad hoc string hacks.

use crate::errors::{AppError, AppResult};
use crate::models::company::Company;
use crate::models::employee::Employee;

/// Canonical form of a tag: uppercase, hex characters only, left-padded with
/// '0' to an even length. Idempotent.
pub fn normalize(raw: &str) -> String {
    let mut hex: String = raw
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if hex.len() % 2 != 0 {
        hex.insert(0, '0');
    }
    hex
}

/// Reverse the byte order of a normalized hex string: split into 2-char
/// groups, reverse the group order, rejoin. Self-inverse on even-length
/// input.
pub fn reverse_byte_pairs(normalized: &str) -> String {
    let bytes = normalized.as_bytes();
    let mut out = String::with_capacity(normalized.len());

    for chunk in bytes.chunks(2).rev() {
        out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    out
}

fn strip_leading_zeros(s: &str) -> &str {
    let stripped = s.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Tolerant equality between a scanned tag and a registered one.
///
/// Candidate order: exact normalized match, match after stripping leading
/// zeros from both sides, match against the byte-pair-reversed scan.
pub fn matches(scanned: &str, registered: &str) -> bool {
    let scan = normalize(scanned);
    let reg = normalize(registered);

    if scan.is_empty() || reg.is_empty() {
        return false;
    }

    if scan == reg {
        return true;
    }

    if strip_leading_zeros(&scan) == strip_leading_zeros(&reg) {
        return true;
    }

    reverse_byte_pairs(&scan) == reg
}

/// Identity gate for a punch.
///
/// Office mode (company has a registered office tag): a scan is mandatory
/// and must match the office tag. Personal mode: a scan is optional, but if
/// present it must match the employee's own registered tag.
pub fn validate_identity(
    employee: &Employee,
    company: &Company,
    scanned: Option<&str>,
) -> AppResult<()> {
    if company.office_mode() {
        let office_tag = company.office_tag.as_deref().unwrap_or_default();

        let Some(scan) = scanned else {
            return Err(AppError::MissingIdentity);
        };
        if !matches(scan, office_tag) {
            return Err(AppError::IdentityMismatch);
        }
        return Ok(());
    }

    if let Some(scan) = scanned {
        let registered = employee.nfc_tag.as_deref().unwrap_or_default();
        if !matches(scan, registered) {
            return Err(AppError::IdentityMismatch);
        }
    }

    Ok(())
}
