// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 extensions, OID tables, and chain validation.

pub mod extensions;
pub mod oids;
pub mod validator;

pub use extensions::{
    BasicConstraints, ExtendedKeyUsage, Extensions, KeyUsage, NsCertType, SubjectAltName,
    MAX_SUBJECT_ALT_NAMES,
};
pub use validator::{ChainValidator, ValidationOptions};
