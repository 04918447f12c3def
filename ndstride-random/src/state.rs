//! Sectioned state arrays shared by all generators.

use ndstride_core::{Error, Result};

/// Schema version written as the first element of every state array.
pub(crate) const STATE_ARRAY_VERSION: u32 = 1;

/// Serialize `sections` as `| version | count | len | ...data | ... |`.
pub(crate) fn encode(sections: &[&[u32]]) -> Vec<u32> {
    let total = 2 + sections.iter().map(|s| s.len() + 1).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.push(STATE_ARRAY_VERSION);
    out.push(sections.len() as u32);
    for section in sections {
        out.push(section.len() as u32);
        out.extend_from_slice(section);
    }
    out
}

/// Split a state array into its sections.
///
/// `lengths[i]` is the required length of section `i`, or `None` when any
/// non-empty length is accepted. The whole array must be consumed.
pub(crate) fn decode<'a>(name: &str, state: &'a [u32], lengths: &[Option<usize>]) -> Result<Vec<&'a [u32]>> {
    let invalid = |msg: String| Error::InvalidState(format!("{name}: {msg}"));

    if state.len() < 2 {
        return Err(invalid(format!("state array of length {} has no preamble", state.len())));
    }
    if state[0] != STATE_ARRAY_VERSION {
        return Err(invalid(format!(
            "incompatible schema version; expected {STATE_ARRAY_VERSION}, got {}",
            state[0]
        )));
    }
    if state[1] as usize != lengths.len() {
        return Err(invalid(format!(
            "expected {} sections, got {}",
            lengths.len(),
            state[1]
        )));
    }

    let mut sections = Vec::with_capacity(lengths.len());
    let mut pos = 2;
    for (i, expected) in lengths.iter().enumerate() {
        let Some(&len) = state.get(pos) else {
            return Err(invalid(format!("section {i} is missing")));
        };
        let len = len as usize;
        match expected {
            Some(want) if *want != len => {
                return Err(invalid(format!("section {i} has length {len}, expected {want}")));
            }
            None if len == 0 => return Err(invalid(format!("section {i} is empty"))),
            _ => {}
        }
        let data = state
            .get(pos + 1..pos + 1 + len)
            .ok_or_else(|| invalid(format!("section {i} overruns the array")))?;
        sections.push(data);
        pos += 1 + len;
    }
    if pos != state.len() {
        return Err(invalid(format!(
            "{} trailing elements after the last section",
            state.len() - pos
        )));
    }
    Ok(sections)
}
