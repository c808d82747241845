//! The error status table and its helpers.

use std::fmt;
use std::sync::LazyLock;

use docenum_core::{
    Choice, CodedError, Declaration, Dict, DocEnum, FieldNames, Member, Param,
};
use log::debug;
use serde::{Serialize, Serializer};

/// Export key for the status name.
pub const NAME_KEY: &str = "error";

/// Export key for the status code.
pub const CODE_KEY: &str = "code";

/// Export key for the status message.
pub const MSG_KEY: &str = "msg";

/// Export keys used by the status table.
pub fn field_names() -> FieldNames {
    FieldNames::new(NAME_KEY, CODE_KEY, MSG_KEY)
}

/// Broad category of an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Authentication,
    RequestFormat,
    Interface,
    Business,
    Internal,
}

// ── Table ─────────────────────────────────────────────────────────

macro_rules! error_statuses {
    ($(
        $(#[$meta:meta])*
        $variant:ident => ($class:ident, $name:literal, $code:literal, $msg:literal),
    )+) => {
        /// A member of the API error status table.
        ///
        /// Variants are listed in declaration order; the exported `error`
        /// name is the declared item name, which can differ in case from
        /// the variant (`MissingAppId` exports as `"MissingAPPID"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorStatus {
            $( $(#[$meta])* $variant, )+
        }

        impl ErrorStatus {
            /// Every status, in declaration order.
            pub const ALL: &'static [ErrorStatus] = &[$( ErrorStatus::$variant, )+];

            /// The declared item name.
            pub const fn name(self) -> &'static str {
                match self { $( Self::$variant => $name, )+ }
            }

            /// The status code.
            pub const fn code(self) -> &'static str {
                match self { $( Self::$variant => $code, )+ }
            }

            /// The message template, possibly with a `{}` placeholder.
            pub const fn template(self) -> &'static str {
                match self { $( Self::$variant => $msg, )+ }
            }

            /// The category the status belongs to.
            pub const fn class(self) -> ErrorClass {
                match self { $( Self::$variant => ErrorClass::$class, )+ }
            }
        }
    };
}

error_statuses! {
    /// Authentication failed for an unknown reason.
    Unauthorized => (Authentication, "Unauthorized", "10000", "Authentication failed, unknown error"),
    MissingAppId => (Authentication, "MissingAPPID", "10001", "Authentication failed, missing appid"),
    InvalidAppId => (Authentication, "InvalidAPPID", "10002", "Authentication failed, invalid appid"),
    MissingSign => (Authentication, "MissingSign", "10003", "Authentication failed, missing sign"),
    InvalidSign => (Authentication, "InvalidSign", "10004", "Authentication failed, invalid sign"),
    /// The caller may not operate on the resource.
    Forbidden => (Authentication, "Forbidden", "10005", "Not authorized to operate on this resource"),
    MissingTimestamp => (Authentication, "MissingTimestamp", "10006", "Authentication failed, missing timestamp"),
    InvalidTimestamp => (Authentication, "InvalidTimestamp", "10007", "Authentication failed, invalid timestamp"),
    TimestampTimeout => (Authentication, "TimestampTimeout", "10008", "Authentication failed, timestamp expired"),

    /// The request body or parameters are malformed.
    BadRequest => (RequestFormat, "BadRequest", "20000", "Bad data format, unknown error"),
    InvalidJson => (RequestFormat, "InvalidJSON", "20001", "Bad data format, body is not valid JSON"),
    MissingArguments => (RequestFormat, "MissingArguments", "20002", "Bad data format, missing argument {}"),
    InvalidArguments => (RequestFormat, "InvalidArguments", "20003", "Bad data format, argument {} is invalid"),
    InvalidUri => (RequestFormat, "InvalidURI", "20004", "Bad data format, {} in URI is invalid"),
    WrongArguments => (RequestFormat, "WrongArguments", "20005", "Bad data format, unexpected argument {}"),

    /// An upstream interface failed.
    InterfaceError => (Interface, "InterfaceError", "30000", "Interface error, unknown error"),
    VendorInterfaceError => (Interface, "VendorInterfaceError", "30001", "Interface error, vendor interface unavailable"),
    EcommerceInterfaceError => (Interface, "EcommerceInterfaceError", "30002", "Interface error, channel interface unavailable"),
    InterfaceResultError => (Interface, "InterfaceResultError", "30003", "Interface error, abnormal result: {}"),

    /// A business rule rejected the request.
    BusinessError => (Business, "BusinessError", "40000", "Business error, unknown error"),
    Existed => (Business, "Existed", "40001", "Business error, resource already exists"),
    NotFound => (Business, "NotFound", "40004", "Business error, resource does not exist"),
    RelationError => (Business, "RelationError", "40005", "Business error, related resource {} is unavailable"),

    /// The service failed internally.
    InternalError => (Internal, "InternalError", "50000", "Internal service error, unknown error"),
    DatabaseConnError => (Internal, "DatabaseConnError", "50001", "Database error, cannot connect to database"),
    TransactionError => (Internal, "TransactionError", "50002", "Database error, transaction failed"),
    DataReadingError => (Internal, "DataReadingError", "50003", "Database error, failed to read data"),
}

// Literal data; a bad declaration is a programming error caught by the
// table tests below.
#[allow(clippy::expect_used)]
static TABLE: LazyLock<DocEnum> = LazyLock::new(|| {
    DocEnum::builder("ErrorStatus")
        .field_names(field_names())
        .declarations(
            ErrorStatus::ALL
                .iter()
                .map(|s| Declaration::explicit(s.name(), s.code(), s.template())),
        )
        .build()
        .expect("ErrorStatus declarations are valid")
});

/// The status table, built on first use.
pub fn table() -> &'static DocEnum {
    &TABLE
}

/// `(code, message)` for every status, in declaration order.
pub fn choices() -> Vec<Choice> {
    table().list_choices()
}

// ── Operations ────────────────────────────────────────────────────

impl ErrorStatus {
    /// The table member for this status.
    #[allow(clippy::expect_used)]
    pub fn member(self) -> Member<'static> {
        table()
            .member_at(self as usize)
            .expect("ErrorStatus::ALL matches the table order")
    }

    /// Look a status up by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Look a status up by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// The exported message, with `param` substituted into the template when
    /// supplied.
    ///
    /// ```
    /// # use docenum_status::{ErrorStatus, Param};
    /// let msg = ErrorStatus::InvalidUri.get_message(Some(&Param::from("id")));
    /// assert_eq!(msg["msg"], "Bad data format, id in URI is invalid");
    /// ```
    pub fn get_message(self, param: Option<&Param>) -> Dict {
        self.member().message(param)
    }

    /// A [`CodedError`] carrying `status` and this status's message.
    pub fn get_exception(self, status: u16, param: Option<&Param>) -> CodedError {
        debug!("Raising {} ({}) with HTTP status {}", self.name(), self.code(), status);
        CodedError::from_member(self.member(), status, param)
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use docenum_core::Identity;
    use serde_json::json;

    #[test]
    fn test_table_builds() {
        assert_eq!(table().len(), ErrorStatus::ALL.len());
        assert_eq!(table().name(), "ErrorStatus");
    }

    #[test]
    fn test_all_matches_table_order() {
        assert_eq!(table().len(), ErrorStatus::ALL.len());
        for status in ErrorStatus::ALL {
            assert_eq!(status.member().name(), status.name());
        }
        for (status, member) in ErrorStatus::ALL.iter().zip(table().iter()) {
            assert_eq!(status.name(), member.name());
            assert_eq!(&Identity::from(status.code()), member.value());
            assert_eq!(status.template(), member.doc());
        }
    }

    #[test]
    fn test_member_lookup() {
        let member = ErrorStatus::MissingAppId.member();
        assert_eq!(member.name(), "MissingAPPID");
        assert_eq!(member.value(), &Identity::from("10001"));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = ErrorStatus::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ErrorStatus::ALL.len());
    }

    #[test]
    fn test_class_matches_code_range() {
        for status in ErrorStatus::ALL {
            let expected = match &status.code()[..1] {
                "1" => ErrorClass::Authentication,
                "2" => ErrorClass::RequestFormat,
                "3" => ErrorClass::Interface,
                "4" => ErrorClass::Business,
                _ => ErrorClass::Internal,
            };
            assert_eq!(status.class(), expected, "{status}");
        }
    }

    #[test]
    fn test_from_code_and_name() {
        assert_eq!(ErrorStatus::from_code("40004"), Some(ErrorStatus::NotFound));
        assert_eq!(ErrorStatus::from_code("99999"), None);
        assert_eq!(ErrorStatus::from_name("InvalidJSON"), Some(ErrorStatus::InvalidJson));
        assert_eq!(ErrorStatus::from_name("InvalidJson"), None);
    }

    #[test]
    fn test_get_message_without_param() {
        let msg = ErrorStatus::NotFound.get_message(None);
        assert_eq!(msg.len(), 3);
        assert_eq!(msg[NAME_KEY], json!("NotFound"));
        assert_eq!(msg[CODE_KEY], json!("40004"));
        assert_eq!(msg[MSG_KEY], json!("Business error, resource does not exist"));
    }

    #[test]
    fn test_get_message_with_list_param() {
        let param = Param::from(vec!["10001"]);
        let msg = ErrorStatus::RelationError.get_message(Some(&param));
        assert_eq!(
            msg[MSG_KEY],
            json!("Business error, related resource ['10001'] is unavailable")
        );
    }

    #[test]
    fn test_get_message_with_empty_param_is_formatted() {
        let msg = ErrorStatus::MissingArguments.get_message(Some(&Param::from("")));
        assert_eq!(msg[MSG_KEY], json!("Bad data format, missing argument "));
        let msg = ErrorStatus::InterfaceResultError.get_message(Some(&Param::Int(0)));
        assert_eq!(msg[MSG_KEY], json!("Interface error, abnormal result: 0"));
    }

    #[test]
    fn test_get_exception() {
        let param = Param::from("timeout");
        let err = ErrorStatus::InterfaceResultError.get_exception(502, Some(&param));
        assert_eq!(err.status, 502);
        assert_eq!(err.msg[NAME_KEY], json!("InterfaceResultError"));
        assert_eq!(
            err.msg[MSG_KEY],
            json!("Interface error, abnormal result: timeout")
        );
    }

    #[test]
    fn test_choices() {
        let choices = choices();
        assert_eq!(choices.len(), 27);
        assert_eq!(
            choices[0],
            (
                Identity::from("10000"),
                "Authentication failed, unknown error".to_string()
            )
        );
        assert_eq!(choices[26].0, Identity::from("50003"));
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(ErrorStatus::InvalidUri.to_string(), "InvalidURI");
        assert_eq!(
            serde_json::to_value(ErrorStatus::InvalidUri).unwrap(),
            json!("InvalidURI")
        );
        assert_eq!(
            serde_json::to_value(ErrorClass::RequestFormat).unwrap(),
            json!("request_format")
        );
    }
}
