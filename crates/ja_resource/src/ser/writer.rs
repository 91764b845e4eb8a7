use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::Value;

use super::empty::is_empty_encoding;
use crate::info::{FieldDescriptor, TypeDescriptor};
use crate::{Error, FieldValue, Resource, Result};

/// Appends the encoding of one record to `out`.
pub(crate) fn write_record<R: Resource>(record: &mut R, scope: &str, out: &mut Vec<u8>) -> Result<()> {
    record.before_encode().map_err(Error::Hook)?;

    if let Some(custom) = record.encode_override() {
        out.extend_from_slice(&custom.map_err(Error::Hook)?);
        return Ok(());
    }

    let info = R::descriptor();
    log::trace!("encoding {} (scope {scope:?})", info.type_ident());

    match info.identity() {
        Some(identity) => write_resource(info, identity, record, scope, out),
        None => write_plain(info, record, out),
    }
}

// `{"<declared>":<value>,...}` over every field, for types without an id.
fn write_plain<R: Resource>(info: &TypeDescriptor<R>, record: &R, out: &mut Vec<u8>) -> Result<()> {
    out.push(b'{');
    for (index, field) in info.fields().iter().enumerate() {
        if index > 0 {
            out.push(b',');
        }
        write_key(out, field.name())?;
        out.extend_from_slice(encode_value(field.value(record))?.as_bytes());
    }
    out.push(b'}');
    Ok(())
}

fn write_resource<R: Resource>(
    info: &TypeDescriptor<R>,
    identity: &FieldDescriptor<R>,
    record: &R,
    scope: &str,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.extend_from_slice(b"{\"id\":");
    write_identifier(identity.value(record), out)?;
    out.extend_from_slice(b",\"type\":");
    write_string(out, info.resource_type())?;

    if info.attributes().len() > 0 {
        out.extend_from_slice(b",\"attributes\":{");
        let mut first = true;
        for field in info.attributes() {
            if !field.in_scope(scope) {
                continue;
            }
            let encoded = encode_value(field.value(record))?;
            if field.skips_if_empty() && is_empty_encoding(&encoded) {
                continue;
            }
            if !first {
                out.push(b',');
            }
            first = false;
            write_key(out, field.wire_name())?;
            if field.is_quoted() {
                write_quoted(out, &encoded)?;
            } else {
                out.extend_from_slice(encoded.as_bytes());
            }
        }
        out.push(b'}');
    }

    write_section(out, "links", info.links(), record)?;
    write_section(out, "relationships", info.relations(), record)?;

    out.push(b'}');
    Ok(())
}

fn write_section<'a, R: Resource>(
    out: &mut Vec<u8>,
    key: &str,
    fields: impl ExactSizeIterator<Item = &'a FieldDescriptor<R>>,
    record: &R,
) -> Result<()> {
    if fields.len() == 0 {
        return Ok(());
    }
    out.push(b',');
    write_key(out, key)?;
    out.push(b'{');
    for (index, field) in fields.enumerate() {
        if index > 0 {
            out.push(b',');
        }
        write_key(out, field.wire_name())?;
        out.extend_from_slice(encode_value(field.value(record))?.as_bytes());
    }
    out.push(b'}');
    Ok(())
}

// Strings and numbers become a JSON string; other encodings are kept as-is.
fn write_identifier(value: &dyn FieldValue, out: &mut Vec<u8>) -> Result<()> {
    match serde_json::to_value(value.as_serialize()).map_err(Error::Encode)? {
        Value::String(id) => write_string(out, &id),
        Value::Number(id) => {
            out.push(b'"');
            out.extend_from_slice(id.to_string().as_bytes());
            out.push(b'"');
            Ok(())
        }
        other => serde_json::to_writer(out, &other).map_err(Error::Encode),
    }
}

// A quoted value is a JSON string holding the original encoding; `null`
// stays bare.
fn write_quoted(out: &mut Vec<u8>, encoded: &str) -> Result<()> {
    if encoded == "null" {
        out.extend_from_slice(b"null");
        Ok(())
    } else if encoded.contains(['"', '\\']) {
        write_string(out, encoded)
    } else {
        out.push(b'"');
        out.extend_from_slice(encoded.as_bytes());
        out.push(b'"');
        Ok(())
    }
}

#[inline]
fn encode_value(value: &dyn FieldValue) -> Result<String> {
    serde_json::to_string(value.as_serialize()).map_err(Error::Encode)
}

#[inline]
fn write_string(out: &mut Vec<u8>, s: &str) -> Result<()> {
    serde_json::to_writer(out, s).map_err(Error::Encode)
}

#[inline]
fn write_key(out: &mut Vec<u8>, key: &str) -> Result<()> {
    write_string(out, key)?;
    out.push(b':');
    Ok(())
}
