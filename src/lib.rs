//! One-shot redaction of a leaked presigned S3 URL from a single committed
//! file, intended to run as a `git filter-branch` tree-filter once per commit.
//! The `redact-s3-url` binary wires the fixed [`leak`] constants into the
//! generic [`redact::redact_file`] operation.

pub mod leak;
pub mod redact;
