//! Packed bit helpers over a byte store
//!
//! Bits are LSB-first within each byte: bit `i` lives in byte `i / 8` at
//! position `i % 8`. A span is a contiguous run `[start, start + len)` of bit
//! indices; partial head and tail bytes are masked, interior bytes are touched
//! whole.

/// Number of bytes needed to hold `bits` bits
#[inline]
pub(crate) fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[inline]
pub(crate) fn get(data: &[u8], index: usize) -> bool {
    (data[index / 8] >> (index % 8)) & 1 == 1
}

#[inline]
pub(crate) fn set(data: &mut [u8], index: usize, value: bool) {
    let byte_index = index / 8;
    let bit_index = index % 8;
    if value {
        data[byte_index] |= 1 << bit_index;
    } else {
        data[byte_index] &= !(1 << bit_index);
    }
}

/// Byte range and edge masks covering a non-empty span
struct SpanBytes {
    first: usize,
    last: usize,
    head_mask: u8,
    tail_mask: u8,
}

#[inline]
fn span_bytes(start: usize, len: usize) -> SpanBytes {
    let end = start + len - 1;
    let first = start / 8;
    let last = end / 8;
    let head_mask = 0xFFu8 << (start % 8);
    let tail_mask = 0xFFu8 >> (7 - end % 8);
    if first == last {
        SpanBytes {
            first,
            last,
            head_mask: head_mask & tail_mask,
            tail_mask: head_mask & tail_mask,
        }
    } else {
        SpanBytes {
            first,
            last,
            head_mask,
            tail_mask,
        }
    }
}

/// Write `value` into every bit of the span
pub(crate) fn fill_span(data: &mut [u8], start: usize, len: usize, value: bool) {
    if len == 0 {
        return;
    }
    let span = span_bytes(start, len);
    let apply = |byte: &mut u8, mask: u8| {
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    };

    apply(&mut data[span.first], span.head_mask);
    if span.last > span.first {
        let fill = if value { 0xFF } else { 0x00 };
        data[span.first + 1..span.last].fill(fill);
        apply(&mut data[span.last], span.tail_mask);
    }
}

/// True if any bit of the span is set
pub(crate) fn span_any(data: &[u8], start: usize, len: usize) -> bool {
    if len == 0 {
        return false;
    }
    let span = span_bytes(start, len);
    if data[span.first] & span.head_mask != 0 {
        return true;
    }
    if span.last == span.first {
        return false;
    }
    data[span.first + 1..span.last].iter().any(|&b| b != 0)
        || data[span.last] & span.tail_mask != 0
}

/// Number of set bits in the span
pub(crate) fn span_count(data: &[u8], start: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let span = span_bytes(start, len);
    let mut count = (data[span.first] & span.head_mask).count_ones() as usize;
    if span.last > span.first {
        count += data[span.first + 1..span.last]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum::<usize>();
        count += (data[span.last] & span.tail_mask).count_ones() as usize;
    }
    count
}
