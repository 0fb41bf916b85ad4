use std::str;

/// The highest code point accepted by `\u` and `\U` escapes.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Returns the length of the UTF-8 sequence at the start of `bytes` if it is complete and valid.
pub fn utf8_sequence_len(bytes: &[u8]) -> Option<usize> {
    let len = match bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    str::from_utf8(bytes.get(..len)?).ok().map(|_| len)
}

/// Converts an escaped code point to a `char`, rejecting surrogates and values above [`MAX_CODE_POINT`].
pub fn code_point_to_char(point: u32) -> Option<char> {
    if point > MAX_CODE_POINT {
        None
    } else {
        char::from_u32(point)
    }
}

pub fn convert_hexa_byte(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Whitespace as in the C locale: space, `\t`, `\n`, vertical tab, form feed and `\r`.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

pub fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
