//! ==============================================================================
//! paths.rs - admin route paths and path segment encoding
//! ==============================================================================
//!
//! used by the dashboard for links and for api urls. names and claim urls go
//! into paths as single segments, so `/`, `?` and `#` inside them are escaped.
//!
//! ==============================================================================

pub const WEBSITES: &str = "/admin/websites";
pub const NEW_WEBSITE: &str = "/admin/websites/new";

pub fn edit_website(claim_name: &str) -> String {
    format!("{}/{}", WEBSITES, encode_segment(claim_name))
}

/// per-claim page (remove) for one claim url, served by the host
pub fn claim_url(claim_name: &str, claim_url: &str) -> String {
    format!(
        "{}/{}/claims/{}",
        WEBSITES,
        encode_segment(claim_name),
        encode_segment(claim_url)
    )
}

/// percent-encode one path segment, same output as js `encodeURIComponent`
pub fn encode_segment(segment: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            }
        }
    }
    out
}

// ==============================================================================
// tests
// ==============================================================================
