use crate::error::CorruptError;

pub(crate) fn slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], CorruptError> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(CorruptError::Truncated { offset })
}

pub(crate) fn u32_le(data: &[u8], offset: usize) -> Result<u32, CorruptError> {
    let bytes = slice(data, offset, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub(crate) fn u64_le(data: &[u8], offset: usize) -> Result<u64, CorruptError> {
    let bytes = slice(data, offset, 8)?;
    Ok(u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}

/// Bytes up to the first NUL, or all of them.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
