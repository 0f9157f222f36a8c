//! Macro for implementing Display and FromStr for wire-named enums
//!
//! Fatture in Cloud and the host both exchange enum values as fixed strings
//! (`"getAll"`, `"credit_note"`, `"end_of_month"`). The macro keeps the enum
//! and its wire spelling in one table and derives `as_str`, `ALL`, `Display`
//! and `FromStr` from it.
//!
//! # Example
//!
//! ```rust
//! use ficbridge_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Inbound,
//!     Outbound,
//! }
//!
//! impl_wire_name_conversions!(Direction {
//!     Inbound => "inbound",
//!     Outbound => "outbound",
//! });
//!
//! assert_eq!(Direction::Inbound.as_str(), "inbound");
//! assert_eq!("outbound".parse::<Direction>(), Ok(Direction::Outbound));
//! ```

/// Implements `as_str`, `ALL`, Display and FromStr for wire-named enums
///
/// Parsing is exact: wire names are case-sensitive (`getAll` is not
/// `getall`). The error carries the enum name and the rejected input.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Wire spelling of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestAction {
        GetAll,
        ListCompanies,
        Delete,
    }

    impl_wire_name_conversions!(TestAction {
        GetAll => "getAll",
        ListCompanies => "listCompanies",
        Delete => "delete",
    });

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(TestAction::GetAll.to_string(), "getAll");
        assert_eq!(TestAction::ListCompanies.to_string(), "listCompanies");
        assert_eq!(TestAction::Delete.as_str(), "delete");
    }

    #[test]
    fn test_fromstr_exact_match() {
        assert_eq!(TestAction::from_str("getAll").unwrap(), TestAction::GetAll);
        assert_eq!(TestAction::from_str("delete").unwrap(), TestAction::Delete);
    }

    #[test]
    fn test_fromstr_is_case_sensitive() {
        let result = TestAction::from_str("getall");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestAction: getall"));
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        assert_eq!(
            TestAction::ALL,
            &[TestAction::GetAll, TestAction::ListCompanies, TestAction::Delete]
        );
    }
}
