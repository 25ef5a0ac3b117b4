//! Character set handling for the SQL logging hook.
//!
//! Firebird names its connection character sets after the code pages they
//! wrap (`WIN1252`, `ISO8859_1`, `UTF8`, ...). SQL text handed to the
//! adapter carries the name of the encoding it was produced in; when that
//! tag names the connection encoding, the bytes are transcoded to UTF-8
//! before logging. Anything else is decoded lossily.

use std::borrow::Cow;

use encoding_rs::Encoding;

/// Resolve a Firebird character set name to an encoding.
///
/// Unrecognized names fall through to WHATWG label lookup, so standard
/// spellings like `UTF-8` or `windows-1252` also resolve.
pub(crate) fn encoding_for_charset(name: &str) -> Option<&'static Encoding> {
    let upper = name.trim().to_uppercase();
    let label: &str = match upper.as_str() {
        "UTF8" => "utf-8",
        "WIN1250" => "windows-1250",
        "WIN1251" => "windows-1251",
        "WIN1252" => "windows-1252",
        "WIN1253" => "windows-1253",
        "WIN1254" => "windows-1254",
        "WIN1255" => "windows-1255",
        "WIN1256" => "windows-1256",
        "WIN1257" => "windows-1257",
        "WIN1258" => "windows-1258",
        "ISO8859_1" | "LATIN1" => "iso-8859-1",
        "ISO8859_2" => "iso-8859-2",
        "KOI8R" => "koi8-r",
        "KOI8U" => "koi8-u",
        _ => return Encoding::for_label(name.trim().as_bytes()),
    };
    Encoding::for_label(label.as_bytes())
}

/// Prepare SQL bytes for logging.
///
/// Transcodes from the connection encoding to UTF-8 only when the SQL's
/// tagged encoding name equals the connection's configured encoding name;
/// in every other case the bytes pass through as lossy UTF-8.
pub(crate) fn recode_sql<'a>(
    sql: &'a [u8],
    tagged_encoding: &str,
    connection_encoding: &str,
) -> Cow<'a, str> {
    if tagged_encoding == connection_encoding {
        if let Some(encoding) = encoding_for_charset(connection_encoding) {
            let (text, _, _) = encoding.decode(sql);
            return text;
        }
    }
    String::from_utf8_lossy(sql)
}
