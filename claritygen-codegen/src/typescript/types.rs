//! Clarity-to-TypeScript type mapping.
//!
//! Two pure functions drive every emitter: [`ts_type`] maps a Clarity type
//! to the TypeScript type callers see, and [`wire_expr`] produces the
//! expression that converts a caller-supplied value into the wire-level
//! Clarity value the transaction library expects.

use claritygen_abi::ClarityType;

/// TypeScript type accepted for buffer arguments.
///
/// Callers may pass raw bytes, a plain string (hex-detected via `0x`
/// prefix, otherwise treated as ASCII), or an explicitly tagged value.
pub const BUFFER_TS_TYPE: &str =
    "Uint8Array | string | { type: 'ascii' | 'utf8' | 'hex'; value: string }";

/// Maps a Clarity type to its TypeScript type expression.
#[must_use]
pub fn ts_type(ty: &ClarityType) -> String {
    match ty {
        ClarityType::UInt128 | ClarityType::Int128 => "bigint".to_string(),
        ClarityType::Bool => "boolean".to_string(),
        ClarityType::Principal => "string".to_string(),
        ClarityType::Buffer { .. } => BUFFER_TS_TYPE.to_string(),
        ClarityType::StringAscii { .. } | ClarityType::StringUtf8 { .. } => "string".to_string(),
        ClarityType::Optional(inner) => format!("{} | null", ts_type(inner)),
        // Responses and tuples stay untyped beyond this level; callers pass
        // pre-built Clarity values for them.
        ClarityType::Response { .. } | ClarityType::Tuple(_) | ClarityType::Opaque => {
            "any".to_string()
        }
        ClarityType::List { element, .. } => {
            let inner = ts_type(element);
            if inner.contains(' ') {
                format!("({inner})[]")
            } else {
                format!("{inner}[]")
            }
        }
    }
}

/// Produces the expression converting `value` to its wire representation.
///
/// Responses, tuples, lists, and opaque values are passed through
/// unconverted; the caller supplies wire-level values for those.
#[must_use]
pub fn wire_expr(ty: &ClarityType, value: &str) -> String {
    match ty {
        ClarityType::UInt128 => format!("cv.uintCV({value})"),
        ClarityType::Int128 => format!("cv.intCV({value})"),
        ClarityType::Bool => format!("cv.boolCV({value})"),
        ClarityType::Principal => format!("cv.principalCV({value})"),
        ClarityType::Buffer { .. } => buffer_wire_expr(value),
        ClarityType::StringAscii { .. } => format!("cv.stringAsciiCV({value})"),
        ClarityType::StringUtf8 { .. } => format!("cv.stringUtf8CV({value})"),
        ClarityType::Optional(inner) => format!(
            "{value} === null ? cv.noneCV() : cv.someCV({})",
            wire_expr(inner, value)
        ),
        ClarityType::Response { .. }
        | ClarityType::Tuple(_)
        | ClarityType::List { .. }
        | ClarityType::Opaque => value.to_string(),
    }
}

/// Emits the inline buffer conversion for one call site.
///
/// Dispatches at the caller's runtime over raw bytes, plain strings (hex
/// auto-detected by `0x` prefix, otherwise ASCII), and the tagged
/// `{ type, value }` form, throwing on anything else. Emitted verbatim per
/// buffer argument rather than factored into a shared import, so generated
/// modules carry no extra dependency.
fn buffer_wire_expr(value: &str) -> String {
    format!(
        "((val) => {{
      const ascii = (s: string) => Uint8Array.from(s, (c) => c.charCodeAt(0));
      const utf8 = (s: string) => new TextEncoder().encode(s);
      const hex = (s: string) => {{
        const clean = s.startsWith('0x') ? s.slice(2) : s;
        const bytes = new Uint8Array(clean.length / 2);
        for (let i = 0; i < bytes.length; i += 1) bytes[i] = parseInt(clean.slice(i * 2, i * 2 + 2), 16);
        return bytes;
      }};
      if (val instanceof Uint8Array) return cv.bufferCV(val);
      if (typeof val === 'string') return cv.bufferCV(val.startsWith('0x') ? hex(val) : ascii(val));
      if (val !== null && typeof val === 'object') {{
        if (val.type === 'ascii') return cv.bufferCV(ascii(val.value));
        if (val.type === 'utf8') return cv.bufferCV(utf8(val.value));
        if (val.type === 'hex') return cv.bufferCV(hex(val.value));
      }}
      throw new Error(`Unsupported buffer value: ${{JSON.stringify(val)}}`);
    }})({value})"
    )
}
