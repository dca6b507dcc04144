/// `false`
pub(crate) const TAG_FALSE: u8 = 0x80;
/// `true`
pub(crate) const TAG_TRUE: u8 = 0x81;
/// Terminates any collection.
pub(crate) const TAG_END: u8 = 0x84;
/// Annotation. Recognized, never produced or consumed.
pub(crate) const TAG_ANNOTATION: u8 = 0x85;
/// Embedded value. Recognized, never produced or consumed.
pub(crate) const TAG_EMBEDDED: u8 = 0x86;
/// IEEE-754 float; the LEB128 length (4 or 8) selects the precision.
pub(crate) const TAG_IEEE754: u8 = 0x87;
/// Signed integer: LEB128 length, then two's-complement big-endian digits.
pub(crate) const TAG_INT: u8 = 0xB0;
/// String: LEB128 length, then UTF-8 payload.
pub(crate) const TAG_STRING: u8 = 0xB1;
/// Bytestring: LEB128 length, then raw payload.
pub(crate) const TAG_BYTES: u8 = 0xB2;
/// Symbol: LEB128 length, then UTF-8 payload.
pub(crate) const TAG_SYMBOL: u8 = 0xB3;
/// Record. The first value is the label; at least one value is required.
pub(crate) const TAG_RECORD: u8 = 0xB4;
/// Sequence.
pub(crate) const TAG_SEQUENCE: u8 = 0xB5;
/// Set. Members are emitted in canonical order.
pub(crate) const TAG_SET: u8 = 0xB6;
/// Dictionary. Entries are emitted in canonical key order.
pub(crate) const TAG_DICTIONARY: u8 = 0xB7;
