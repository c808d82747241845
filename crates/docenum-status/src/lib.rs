//! API error statuses.
//!
//! [`ErrorStatus`] is a fixed table of application error codes, each with a
//! message template, built on a [`DocEnum`] that exports members as
//! `{"error": name, "code": code, "msg": message}`.
//!
//! # Code Ranges
//!
//! | Range   | Class                         |
//! |---------|-------------------------------|
//! | `10xxx` | Authentication                |
//! | `20xxx` | Request format                |
//! | `30xxx` | Upstream interface            |
//! | `40xxx` | Business logic                |
//! | `50xxx` | Internal service              |
//!
//! # Usage
//!
//! ```
//! use docenum_core::Param;
//! use docenum_status::ErrorStatus;
//!
//! let msg = ErrorStatus::MissingArguments.get_message(Some(&Param::from(vec!["sku"])));
//! assert_eq!(msg["code"], "20002");
//! assert_eq!(msg["msg"], "Bad data format, missing argument ['sku']");
//!
//! let err = ErrorStatus::NotFound.get_exception(404, None);
//! assert_eq!(err.status, 404);
//! assert_eq!(err.msg["error"], "NotFound");
//! ```

mod status;

pub use status::{
    CODE_KEY, ErrorClass, ErrorStatus, MSG_KEY, NAME_KEY, choices, field_names, table,
};

pub use docenum_core::{CodedError, Dict, DocEnum, Identity, Member, Param};
