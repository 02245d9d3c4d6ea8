// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Multipart body encoding for POST uploads
//!
//! Each descriptor part becomes one form-data part carrying its
//! declared media type; `Content-Disposition` names the part, with no
//! filename attribute. The form generates a random boundary, so part
//! content cannot collide with the delimiter.

use std::fs;

use reqwest::blocking::multipart::{Form, Part as FormPart};

use crate::error::{Error, Result};
use crate::request::{Part, PartBody};

/// Encode descriptor parts into a multipart/form-data body
///
/// File parts are read from disk here, at call time; an unreadable
/// file is a descriptor problem, not a transport failure.
pub(crate) fn encode_parts(parts: &[(String, Part)]) -> Result<Form> {
    let mut form = Form::new();
    for (name, part) in parts {
        let content = match &part.body {
            PartBody::Bytes(bytes) => bytes.to_vec(),
            PartBody::File(path) => fs::read(path).map_err(|e| {
                Error::Request(format!("cannot read part file '{}': {e}", path.display()))
            })?,
        };
        let form_part = FormPart::bytes(content).mime_str(&part.media_type).map_err(|_| {
            Error::Request(format!(
                "invalid media type '{}' for part '{}'",
                part.media_type, name
            ))
        })?;
        form = form.part(name.clone(), form_part);
    }
    Ok(form)
}
